mod frame;
mod null_renderer;
mod path;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use path::{Path, PathCommand};

use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully computed, deterministic `RenderFrame` so drawing
/// code stays isolated from layout and highlight bookkeeping.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame<'_>) -> ChartResult<()>;
}
