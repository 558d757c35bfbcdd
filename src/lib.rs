//! chart-geom: geometry engine for line, column and pie charts.
//!
//! The crate turns a validated [`ChartSpec`](crate::core::ChartSpec) into pixel-space geometry
//! (axis ticks, bar rectangles, polyline/area paths, pie wedges) without
//! drawing anything. Rendering backends consume [`ChartGeometry`](crate::core::ChartGeometry)
//! through the [`Renderer`](crate::render::Renderer) contract.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
