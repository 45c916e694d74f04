use crate::core::color::Color;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ToolType {
    Pen,
    Eraser,
    Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolState {
    pub tool: ToolType,
    pub color: Color,
    pub diameter: u32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            tool: ToolType::Pen,
            color: Color::new(0, 0, 0, 255),
            diameter: 5,
        }
    }
}
