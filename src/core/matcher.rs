use super::color::Color;

/// 颜色匹配配置：容差比较 + 轮廓线判定。
/// 模板线稿由深色高不透明像素构成，填充不得越过或覆盖它们。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorMatcher {
    pub tolerance: u8,
    pub boundary_rgb_threshold: u8,
    pub boundary_alpha_threshold: u8,
}

impl Default for ColorMatcher {
    fn default() -> Self {
        Self {
            tolerance: 5,
            boundary_rgb_threshold: 60,
            boundary_alpha_threshold: 200,
        }
    }
}

impl ColorMatcher {
    pub fn new(tolerance: u8) -> Self {
        Self { tolerance, ..Self::default() }
    }

    pub fn matches_within(a: Color, b: Color, tolerance: u8) -> bool {
        a.r.abs_diff(b.r) <= tolerance
            && a.g.abs_diff(b.g) <= tolerance
            && a.b.abs_diff(b.b) <= tolerance
            && a.a.abs_diff(b.a) <= tolerance
    }

    pub fn matches(&self, a: Color, b: Color) -> bool {
        Self::matches_within(a, b, self.tolerance)
    }

    pub fn is_boundary(&self, c: Color) -> bool {
        c.r < self.boundary_rgb_threshold
            && c.g < self.boundary_rgb_threshold
            && c.b < self.boundary_rgb_threshold
            && c.a > self.boundary_alpha_threshold
    }
}

#[cfg(test)]
mod tests;
