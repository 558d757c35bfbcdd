use tracing::{debug, trace, warn};

use crate::core::{ChartGeometry, ChartSpec, compute_geometry};
use crate::error::{ChartError, ChartResult};
use crate::interaction::HighlightState;
use crate::render::{RenderFrame, Renderer};

use super::ChartEngineConfig;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the current spec, the geometry computed from it and
/// the highlight state, and hands frames to the renderer.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    spec: Option<ChartSpec>,
    geometry: Option<ChartGeometry>,
    highlight: HighlightState,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            spec: None,
            geometry: None,
            highlight: HighlightState::default(),
        })
    }

    /// Replaces the chart spec and recomputes all geometry.
    ///
    /// An empty series leaves the previous spec and geometry untouched and
    /// returns `false`. Otherwise the geometry is rebuilt wholesale, the
    /// highlight is cleared and `true` is returned.
    pub fn set_spec(&mut self, spec: ChartSpec) -> bool {
        if spec.is_empty() {
            debug!(kind = spec.kind.as_str(), "ignoring spec with empty series");
            return false;
        }
        if let Err(err) = spec.validate() {
            warn!(error = %err, "spec violates series invariant; computing anyway");
        }

        let geometry = compute_geometry(&spec, self.config.canvas, self.config.pie_frame);
        debug!(
            kind = spec.kind.as_str(),
            series_len = spec.series.len(),
            elements = geometry.element_count(),
            "recomputed chart geometry"
        );
        self.spec = Some(spec);
        self.geometry = Some(geometry);
        self.highlight.clear();
        true
    }

    #[must_use]
    pub fn spec(&self) -> Option<&ChartSpec> {
        self.spec.as_ref()
    }

    #[must_use]
    pub fn geometry(&self) -> Option<&ChartGeometry> {
        self.geometry.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        self.config
    }

    #[must_use]
    pub fn highlight(&self) -> HighlightState {
        self.highlight
    }

    #[must_use]
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlight.index()
    }

    /// Pointer entered element `index` (bar, point or slice).
    pub fn highlight_index(&mut self, index: usize) {
        trace!(index, "highlight element");
        self.highlight.set(index);
    }

    /// Pointer left the highlighted element.
    pub fn clear_highlight(&mut self) {
        trace!("clear highlight");
        self.highlight.clear();
    }

    /// Hands the current geometry to the renderer.
    ///
    /// Fails when no spec with data has been set yet.
    pub fn render(&mut self) -> ChartResult<()> {
        let (Some(spec), Some(geometry)) = (self.spec.as_ref(), self.geometry.as_ref()) else {
            return Err(ChartError::InvalidData(
                "no chart geometry to render".to_owned(),
            ));
        };
        let frame = RenderFrame {
            canvas: self.config.canvas,
            pie_frame: self.config.pie_frame,
            title: &spec.title,
            geometry,
            highlighted: self.highlight.index(),
        };
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
