pub struct Geometry;

impl Geometry {
    /// 点到线段的平方距离，线段退化成点时即点距。
    pub fn dist_sq_to_segment(px: f32, py: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
        let dx = x2 - x1;
        let dy = y2 - y1;
        let len_sq = dx * dx + dy * dy;
        let t = if len_sq == 0.0 {
            0.0
        } else {
            (((px - x1) * dx + (py - y1) * dy) / len_sq).clamp(0.0, 1.0)
        };
        let ex = px - (x1 + t * dx);
        let ey = py - (y1 + t * dy);
        ex * ex + ey * ey
    }

    /// 胶囊体（圆头线段）的包围盒，闭区间。
    pub fn capsule_bounds(x1: i32, y1: i32, x2: i32, y2: i32, radius: f32) -> (i32, i32, i32, i32) {
        let r = radius.ceil() as i32 + 1;
        (
            x1.min(x2) - r,
            y1.min(y2) - r,
            x1.max(x2) + r,
            y1.max(y2) + r,
        )
    }
}
