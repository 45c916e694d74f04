use crate::core::error::CoreError;

#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    PointerDown { x: i32, y: i32 },
    PointerMove { x: i32, y: i32 },
    PointerUp,
}

#[derive(Debug)]
pub enum EngineEffect {
    None,
    RedrawCanvas,
    RedrawRect(u32, u32, u32, u32),
    Error(CoreError),
}
