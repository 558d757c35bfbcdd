use serde::{Deserialize, Serialize};

use crate::core::{ChartGeometry, ChartSpec};
use crate::interaction::HighlightState;
use crate::render::Renderer;

use super::{ChartEngine, ChartEngineConfig};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub config: ChartEngineConfig,
    pub spec: Option<ChartSpec>,
    pub geometry: Option<ChartGeometry>,
    pub highlight: HighlightState,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            config: self.config(),
            spec: self.spec().cloned(),
            geometry: self.geometry().cloned(),
            highlight: self.highlight(),
        }
    }
}
