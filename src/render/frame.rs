use crate::core::{Canvas, ChartGeometry, PieFrame};
use crate::error::{ChartError, ChartResult};

/// Everything a backend needs for one draw pass, borrowed from the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderFrame<'a> {
    pub canvas: Canvas,
    pub pie_frame: PieFrame,
    pub title: &'a str,
    pub geometry: &'a ChartGeometry,
    pub highlighted: Option<usize>,
}

impl RenderFrame<'_> {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.canvas.is_valid() {
            let inner = self.canvas.inner();
            return Err(ChartError::InvalidCanvas {
                width: inner.width,
                height: inner.height,
            });
        }

        if let Some(index) = self.highlighted {
            let count = self.geometry.element_count();
            if index >= count {
                return Err(ChartError::InvalidData(format!(
                    "highlighted index {index} out of range for {count} elements"
                )));
            }
        }

        self.geometry.validate()
    }

    #[must_use]
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted == Some(index)
    }
}
