use crate::core::ChartKind;
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests catch invalid geometry before
/// it reaches a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_kind: Option<ChartKind>,
    pub last_element_count: usize,
    pub last_highlighted: Option<usize>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame<'_>) -> ChartResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_kind = Some(frame.geometry.kind());
        self.last_element_count = frame.geometry.element_count();
        self.last_highlighted = frame.highlighted;
        Ok(())
    }
}
