pub mod column;
pub mod format;
pub mod geometry;
pub mod line;
pub mod pie;
pub mod primitives;
pub mod scale;
pub mod types;
pub mod validation;

pub use column::{COLUMN_GAP_RATIO, ColumnBar, ColumnGeometry, layout_columns};
pub use format::{format_percent, format_value};
pub use geometry::{ChartGeometry, compute_geometry};
pub use line::{LineGeometry, LinePoint, layout_line};
pub use pie::{
    PIE_START_ANGLE, PieFrame, PieGeometry, PieSlice, describe_arc, layout_pie, polar_point,
};
pub use scale::{
    AxisTick, FALLBACK_NICE_MAX, LARGEST_NICE_MAX, TICK_INTERVALS, ValueScale, nice_max,
    series_max, y_ticks,
};
pub use types::{Canvas, ChartKind, ChartSpec, DataPoint, InnerRect, Padding};
pub use validation::{
    DEFAULT_CHART_TITLE, DEFAULT_SERIES_COLOR, SERIES_PALETTE, SeriesRow, default_row_color,
    sanitize_rows,
};
