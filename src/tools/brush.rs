use crate::core::buffer::PixelBuffer;
use crate::core::color::Color;
use crate::core::error::{CoreError, Result};
use super::geometry::Geometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushMode {
    Paint,
    Erase,
}

pub struct StrokeCompositor;

impl StrokeCompositor {
    /// 落笔：在起点盖一个实心圆点（单击出点的情形）。
    pub fn begin_stroke(
        buffer: &mut PixelBuffer,
        x: i32,
        y: i32,
        mode: BrushMode,
        color: Color,
        diameter: u32,
    ) -> Result<()> {
        Self::stamp_capsule(buffer, x, y, x, y, mode, color, diameter)
    }

    /// 拖动：from 到 to 之间盖一段圆头胶囊体，快速移动也不会断线。
    pub fn extend_stroke(
        buffer: &mut PixelBuffer,
        from: (i32, i32),
        to: (i32, i32),
        mode: BrushMode,
        color: Color,
        diameter: u32,
    ) -> Result<()> {
        Self::stamp_capsule(buffer, from.0, from.1, to.0, to.1, mode, color, diameter)
    }

    fn stamp_capsule(
        buffer: &mut PixelBuffer,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        mode: BrushMode,
        color: Color,
        diameter: u32,
    ) -> Result<()> {
        if diameter == 0 {
            return Err(CoreError::InvalidDiameter { diameter });
        }

        let radius = diameter as f32 / 2.0;
        let r_sq = radius * radius;
        let ax = x1 as f32 + 0.5;
        let ay = y1 as f32 + 0.5;
        let bx = x2 as f32 + 0.5;
        let by = y2 as f32 + 0.5;

        let width = buffer.width;
        let (min_x, min_y, max_x, max_y) = Geometry::capsule_bounds(x1, y1, x2, y2, radius);
        let px_min = min_x.max(0);
        let py_min = min_y.max(0);
        let px_max = max_x.min(buffer.width as i32 - 1);
        let py_max = max_y.min(buffer.height as i32 - 1);

        for py in py_min..=py_max {
            for px in px_min..=px_max {
                let cx = px as f32 + 0.5;
                let cy = py as f32 + 0.5;
                if Geometry::dist_sq_to_segment(cx, cy, ax, ay, bx, by) > r_sq {
                    continue;
                }
                let idx = ((py as u32 * width + px as u32) * 4) as usize;
                match mode {
                    BrushMode::Paint => {
                        Self::composite_over(&mut buffer.data[idx..idx + 4], color);
                    }
                    BrushMode::Erase => {
                        buffer.data[idx + 3] = 0;
                    }
                }
            }
        }
        Ok(())
    }

    #[inline(always)]
    fn composite_over(dst: &mut [u8], color: Color) {
        let src_a = color.a as u32;
        if src_a == 0 {
            return;
        }
        let inv_a = 255 - src_a;
        dst[0] = ((color.r as u32 * src_a + dst[0] as u32 * inv_a) / 255) as u8;
        dst[1] = ((color.g as u32 * src_a + dst[1] as u32 * inv_a) / 255) as u8;
        dst[2] = ((color.b as u32 * src_a + dst[2] as u32 * inv_a) / 255) as u8;
        dst[3] = (src_a + dst[3] as u32 * inv_a / 255) as u8;
    }
}
