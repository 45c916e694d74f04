use crate::core::buffer::PixelBuffer;
use crate::core::color::Color;
use crate::core::matcher::ColorMatcher;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    Filled { pixels: usize },
    OutOfBounds,
    NoOp,
    BoundaryClick,
}

pub struct FloodFillEngine;

impl FloodFillEngine {
    /// 从种子点做 4 连通区域填充。所有边界情况走返回值，不抛错。
    pub fn fill(
        buffer: &mut PixelBuffer,
        seed_x: i32,
        seed_y: i32,
        fill_color: Color,
        matcher: &ColorMatcher,
    ) -> FillOutcome {
        let width = buffer.width;
        let height = buffer.height;
        if seed_x < 0 || seed_y < 0 || seed_x >= width as i32 || seed_y >= height as i32 {
            return FillOutcome::OutOfBounds;
        }
        let sx = seed_x as u32;
        let sy = seed_y as u32;

        let target = match buffer.get_pixel(sx, sy) {
            Some(c) => c,
            None => return FillOutcome::OutOfBounds,
        };
        if ColorMatcher::matches_within(target, fill_color, 0) {
            return FillOutcome::NoOp;
        }
        if matcher.is_boundary(target) {
            return FillOutcome::BoundaryClick;
        }

        // 访问标记在入队前检查，队列长度必不超过 W*H，
        // 已判定过的像素不再重算 matches / is_boundary。
        let mut visited = vec![false; buffer.pixel_count()];
        let mut queue: VecDeque<(u32, u32)> = VecDeque::new();
        let mut pixels = 0usize;
        let fill_bytes = fill_color.to_bytes();

        let seed_idx = ((sy * width + sx) * 4) as usize;
        visited[(sy * width + sx) as usize] = true;
        buffer.data[seed_idx..seed_idx + 4].copy_from_slice(&fill_bytes);
        pixels += 1;
        queue.push_back((sx, sy));

        while let Some((x, y)) = queue.pop_front() {
            for (dx, dy) in [(1i32, 0i32), (-1, 0), (0, 1), (0, -1)] {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx < 0 || ny < 0 || nx >= width as i32 || ny >= height as i32 {
                    continue;
                }
                let nx = nx as u32;
                let ny = ny as u32;
                let v = (ny * width + nx) as usize;
                if visited[v] {
                    continue;
                }
                visited[v] = true;

                let idx = v * 4;
                let c = Color::new(
                    buffer.data[idx],
                    buffer.data[idx + 1],
                    buffer.data[idx + 2],
                    buffer.data[idx + 3],
                );
                if matcher.matches(c, target) && !matcher.is_boundary(c) {
                    buffer.data[idx..idx + 4].copy_from_slice(&fill_bytes);
                    pixels += 1;
                    queue.push_back((nx, ny));
                }
            }
        }

        FillOutcome::Filled { pixels }
    }
}

#[cfg(test)]
mod tests;
