use crate::core::buffer::PixelBuffer;
use crate::core::color::Color;
use crate::core::error::Result;
use crate::core::matcher::ColorMatcher;
use crate::history::manager::HistoryManager;
use crate::tools::brush::{BrushMode, StrokeCompositor};
use crate::tools::fill::{FillOutcome, FloodFillEngine};
use crate::tools::geometry::Geometry;
use crate::app::state::{ToolState, ToolType};
use crate::app::events::{EngineEffect, InputEvent};

/// 编辑会话：持有活动画布、历史栈和当前工具状态。
/// UI 层把指针事件喂进来，拿回需要重绘的区域。
#[derive(Debug)]
pub struct CanvasEngine {
    buffer: PixelBuffer,
    history: HistoryManager,
    tool_state: ToolState,
    matcher: ColorMatcher,
    last_pos: Option<(i32, i32)>,
    is_drawing: bool,
}

impl CanvasEngine {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let buffer = PixelBuffer::new(width, height)?;
        let mut history = HistoryManager::new(HistoryManager::DEFAULT_MAX_STEPS);
        history.initialize(&buffer);
        Ok(Self {
            buffer,
            history,
            tool_state: ToolState::default(),
            matcher: ColorMatcher::default(),
            last_pos: None,
            is_drawing: false,
        })
    }

    pub fn buffer(&self) -> &PixelBuffer { &self.buffer }
    pub fn history(&self) -> &HistoryManager { &self.history }
    pub fn tool_state(&self) -> &ToolState { &self.tool_state }
    pub fn matcher(&self) -> &ColorMatcher { &self.matcher }
    pub fn matcher_mut(&mut self) -> &mut ColorMatcher { &mut self.matcher }
    pub fn is_drawing(&self) -> bool { self.is_drawing }

    pub fn set_tool(&mut self, tool: ToolType) {
        self.tool_state.tool = tool;
    }

    pub fn set_primary_color(&mut self, color: Color) {
        self.tool_state.color = color;
    }

    pub fn set_brush_diameter(&mut self, diameter: u32) {
        self.tool_state.diameter = diameter;
    }

    /// 导出当前画布的原始 RGBA 字节，编码落盘由外部协作方负责。
    pub fn snapshot_bytes(&self) -> &[u8] {
        self.buffer.bytes()
    }

    pub fn handle_input(&mut self, event: InputEvent) -> EngineEffect {
        match event {
            InputEvent::PointerDown { x, y } => match self.tool_state.tool {
                ToolType::Fill => match self.fill_at(x, y) {
                    FillOutcome::Filled { .. } => EngineEffect::RedrawCanvas,
                    outcome => {
                        log::debug!("fill at ({}, {}) rejected: {:?}", x, y, outcome);
                        EngineEffect::None
                    }
                },
                ToolType::Pen | ToolType::Eraser => {
                    let mode = self.brush_mode();
                    let result = StrokeCompositor::begin_stroke(
                        &mut self.buffer,
                        x,
                        y,
                        mode,
                        self.tool_state.color,
                        self.tool_state.diameter,
                    );
                    match result {
                        Ok(()) => {
                            self.is_drawing = true;
                            self.last_pos = Some((x, y));
                            self.stroke_effect(x, y, x, y)
                        }
                        Err(e) => EngineEffect::Error(e),
                    }
                }
            },
            InputEvent::PointerMove { x, y } => {
                let from = match (self.is_drawing, self.last_pos) {
                    (true, Some(pos)) => pos,
                    _ => return EngineEffect::None,
                };
                let mode = self.brush_mode();
                let result = StrokeCompositor::extend_stroke(
                    &mut self.buffer,
                    from,
                    (x, y),
                    mode,
                    self.tool_state.color,
                    self.tool_state.diameter,
                );
                match result {
                    Ok(()) => {
                        self.last_pos = Some((x, y));
                        self.stroke_effect(from.0, from.1, x, y)
                    }
                    Err(e) => EngineEffect::Error(e),
                }
            }
            InputEvent::PointerUp => {
                if self.is_drawing {
                    self.is_drawing = false;
                    self.last_pos = None;
                    self.history.commit(&self.buffer);
                    log::debug!("stroke committed, history depth {}", self.history.entries.len());
                }
                EngineEffect::None
            }
        }
    }

    /// 以当前颜色和容差配置执行填充，成功时记入历史。
    pub fn fill_at(&mut self, x: i32, y: i32) -> FillOutcome {
        let outcome = FloodFillEngine::fill(
            &mut self.buffer,
            x,
            y,
            self.tool_state.color,
            &self.matcher,
        );
        if let FillOutcome::Filled { pixels } = outcome {
            self.history.commit(&self.buffer);
            log::debug!("flood fill at ({}, {}) changed {} pixels", x, y, pixels);
        }
        outcome
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.buffer)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.buffer)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// 清空为白底并作为一次动作提交。
    pub fn clear(&mut self) {
        self.buffer.fill(Color::white());
        self.history.commit(&self.buffer);
    }

    /// 改尺寸是破坏性的：换新白底画布，历史整个重建。
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let buffer = PixelBuffer::new(width, height)?;
        log::info!("canvas resized to {}x{}, history reset", width, height);
        self.buffer = buffer;
        self.history.initialize(&self.buffer);
        self.last_pos = None;
        self.is_drawing = false;
        Ok(())
    }

    /// 外部协作方（如模板加载）合成好的画布整个接管进来。
    pub fn replace_buffer(&mut self, buffer: PixelBuffer) {
        self.buffer = buffer;
        self.history.initialize(&self.buffer);
        self.last_pos = None;
        self.is_drawing = false;
    }

    fn brush_mode(&self) -> BrushMode {
        match self.tool_state.tool {
            ToolType::Eraser => BrushMode::Erase,
            _ => BrushMode::Paint,
        }
    }

    fn stroke_effect(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> EngineEffect {
        let radius = self.tool_state.diameter as f32 / 2.0;
        let (min_x, min_y, max_x, max_y) = Geometry::capsule_bounds(x1, y1, x2, y2, radius);
        let x = min_x.max(0);
        let y = min_y.max(0);
        let max_x = max_x.min(self.buffer.width as i32 - 1);
        let max_y = max_y.min(self.buffer.height as i32 - 1);
        if x > max_x || y > max_y {
            return EngineEffect::None;
        }
        EngineEffect::RedrawRect(
            x as u32,
            y as u32,
            (max_x - x + 1) as u32,
            (max_y - y + 1) as u32,
        )
    }
}
