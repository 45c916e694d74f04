use super::color::Color;
use crate::core::error::{CoreError, Result};

#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimension { width, height });
        }
        // 字节数用 usize 算并做溢出检查，超大尺寸不允许回绕成小分配
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(CoreError::InvalidDimension { width, height })?;
        let mut buffer = Self {
            width,
            height,
            data: vec![0u8; len],
        };
        buffer.fill(Color::white());
        Ok(buffer)
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Some(Color::new(
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ))
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(CoreError::OutOfBounds { x, y });
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.data[idx] = color.r;
        self.data[idx + 1] = color.g;
        self.data[idx + 2] = color.b;
        self.data[idx + 3] = color.a;
        Ok(())
    }

    pub fn fill(&mut self, color: Color) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&color.to_bytes());
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// 整块写回一份尺寸一致的快照字节，尺寸不符则拒绝且画布不动。
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() != self.data.len() {
            return Err(CoreError::SnapshotSizeMismatch {
                expected: self.data.len(),
                actual: bytes.len(),
            });
        }
        self.data.copy_from_slice(bytes);
        Ok(())
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
