use serde::{Deserialize, Serialize};

use crate::core::{Canvas, Padding, PieFrame};
use crate::error::{ChartError, ChartResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    #[serde(default = "default_canvas")]
    pub canvas: Canvas,
    #[serde(default = "default_pie_frame")]
    pub pie_frame: PieFrame,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartEngineConfig {
    /// Creates a config with the standard 700x320 canvas and pie frame.
    #[must_use]
    pub fn new() -> Self {
        Self {
            canvas: default_canvas(),
            pie_frame: default_pie_frame(),
        }
    }

    /// Sets canvas size, keeping the current padding.
    #[must_use]
    pub fn with_canvas_size(mut self, width: f64, height: f64) -> Self {
        self.canvas.width = width;
        self.canvas.height = height;
        self
    }

    /// Sets the padding around the inner plot rectangle.
    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.canvas.padding = padding;
        self
    }

    #[must_use]
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    /// Sets the pie center and outer radius, keeping the label radius ratio.
    #[must_use]
    pub fn with_pie_circle(mut self, cx: f64, cy: f64, radius: f64) -> Self {
        self.pie_frame.cx = cx;
        self.pie_frame.cy = cy;
        self.pie_frame.radius = radius;
        self
    }

    #[must_use]
    pub fn with_pie_frame(mut self, pie_frame: PieFrame) -> Self {
        self.pie_frame = pie_frame;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.canvas.is_valid() {
            let inner = self.canvas.inner();
            return Err(ChartError::InvalidCanvas {
                width: inner.width,
                height: inner.height,
            });
        }
        self.pie_frame.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_canvas() -> Canvas {
    Canvas::default()
}

fn default_pie_frame() -> PieFrame {
    PieFrame::default()
}
