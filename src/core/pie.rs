use std::f64::consts::{FRAC_PI_2, PI, TAU};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::format::format_percent;
use crate::core::types::DataPoint;
use crate::error::{ChartError, ChartResult};
use crate::render::Path;

/// Angle of the 12-o'clock ray where the first slice starts.
pub const PIE_START_ANGLE: f64 = -FRAC_PI_2;

const FULL_CIRCLE_EPSILON: f64 = 1e-9;

/// Circle the pie is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieFrame {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    /// Label anchor distance from the center as a share of `radius`.
    pub label_radius_ratio: f64,
}

impl Default for PieFrame {
    fn default() -> Self {
        Self {
            cx: 180.0,
            cy: 160.0,
            radius: 130.0,
            label_radius_ratio: 0.65,
        }
    }
}

impl PieFrame {
    pub fn validate(self) -> ChartResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(ChartError::InvalidData(
                "pie center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "pie radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.label_radius_ratio.is_finite() || !(0.0..=1.0).contains(&self.label_radius_ratio)
        {
            return Err(ChartError::InvalidData(
                "pie label radius ratio must be in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn point_at(self, radius: f64, angle: f64) -> (f64, f64) {
        polar_point(self.cx, self.cy, radius, angle)
    }
}

/// Point at `radius` from `(cx, cy)` along `angle`, in screen space.
#[must_use]
pub fn polar_point(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// One pie wedge. Angles are radians, clockwise in screen space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    pub color: String,
    /// Share of the total in `0..=1`.
    pub percent: f64,
    pub percent_label: String,
    pub start_angle: f64,
    pub end_angle: f64,
    pub path: Path,
    pub label_x: f64,
    pub label_y: f64,
}

impl PieSlice {
    #[must_use]
    pub fn sweep_angle(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Deterministic geometry for a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieGeometry {
    pub slices: Vec<PieSlice>,
    pub total: f64,
}

/// Splits the circle into contiguous wedges proportional to each sample's
/// magnitude, clockwise from 12 o'clock in input order.
///
/// When the magnitudes sum to zero every slice collapses to a zero-width
/// wedge on the start ray with `percent == 0` and `total == 0`.
///
/// When the magnitudes of a finite series sum past `f64::MAX`, shares are
/// taken from magnitudes scaled by the largest one and `total` saturates to
/// `f64::MAX`.
#[must_use]
pub fn layout_pie(series: &[DataPoint], frame: PieFrame) -> PieGeometry {
    let mut total: f64 = series.iter().map(|point| point.value.abs()).sum();
    // Divisor for the shares; rescaled by the largest magnitude on overflow.
    let (scale, scaled_total) = if total.is_finite() {
        (1.0, total)
    } else {
        let largest = series
            .iter()
            .map(|point| OrderedFloat(point.value.abs()))
            .max()
            .map_or(1.0, |max| max.0);
        total = f64::MAX;
        (
            largest,
            series.iter().map(|point| point.value.abs() / largest).sum(),
        )
    };
    let label_radius = frame.radius * frame.label_radius_ratio;

    let mut current_angle = PIE_START_ANGLE;
    let slices = series
        .iter()
        .map(|point| {
            let percent = if scaled_total > 0.0 {
                point.value.abs() / scale / scaled_total
            } else {
                0.0
            };
            let start_angle = current_angle;
            let end_angle = start_angle + percent * TAU;
            current_angle = end_angle;

            let mid_angle = (start_angle + end_angle) / 2.0;
            let (label_x, label_y) = frame.point_at(label_radius, mid_angle);

            PieSlice {
                name: point.name.clone(),
                value: point.value,
                color: point.color.clone(),
                percent,
                percent_label: format_percent(percent),
                start_angle,
                end_angle,
                path: describe_arc(frame.cx, frame.cy, frame.radius, start_angle, end_angle),
                label_x,
                label_y,
            }
        })
        .collect();

    PieGeometry { slices, total }
}

/// Builds a closed wedge: center, out to the start point, clockwise arc to
/// the end point, back to center.
///
/// A full-circle span is emitted as two half arcs because an arc whose end
/// point equals its start point draws nothing.
#[must_use]
pub fn describe_arc(cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) -> Path {
    let span = end_angle - start_angle;
    let (start_x, start_y) = polar_point(cx, cy, radius, start_angle);
    let (end_x, end_y) = polar_point(cx, cy, radius, end_angle);

    let mut path = Path::new();
    path.move_to(cx, cy).line_to(start_x, start_y);
    if span >= TAU - FULL_CIRCLE_EPSILON {
        let (mid_x, mid_y) = polar_point(cx, cy, radius, start_angle + PI);
        path.arc_to(radius, false, true, mid_x, mid_y);
    }
    path.arc_to(radius, span > PI && span < TAU - FULL_CIRCLE_EPSILON, true, end_x, end_y)
        .close();
    path
}

#[cfg(test)]
mod tests {
    use super::{PieFrame, describe_arc, polar_point};
    use crate::render::PathCommand;

    #[test]
    fn quarter_wedge_path_matches_svg_grammar() {
        let path = describe_arc(0.0, 0.0, 10.0, 0.0, std::f64::consts::FRAC_PI_2);
        let commands = path.commands();
        assert_eq!(commands.len(), 4);
        assert_eq!(commands[0], PathCommand::MoveTo { x: 0.0, y: 0.0 });
        assert_eq!(commands[1], PathCommand::LineTo { x: 10.0, y: 0.0 });
        match commands[2] {
            PathCommand::ArcTo {
                rx,
                ry,
                large_arc,
                sweep,
                x,
                y,
                ..
            } => {
                assert_eq!((rx, ry), (10.0, 10.0));
                assert!(!large_arc);
                assert!(sweep);
                assert!(x.abs() <= 1e-9);
                assert!((y - 10.0).abs() <= 1e-9);
            }
            other => panic!("expected arc, got {other:?}"),
        }
        assert_eq!(commands[3], PathCommand::Close);
    }

    #[test]
    fn full_circle_is_split_in_two_arcs() {
        let start = -std::f64::consts::FRAC_PI_2;
        let path = describe_arc(0.0, 0.0, 10.0, start, start + std::f64::consts::TAU);
        let arcs = path
            .commands()
            .iter()
            .filter(|command| matches!(command, PathCommand::ArcTo { .. }))
            .count();
        assert_eq!(arcs, 2);
        assert!(path.is_closed());
    }

    #[test]
    fn frame_point_matches_free_polar_helper() {
        let frame = PieFrame::default();
        let angle = 0.3;
        assert_eq!(
            frame.point_at(50.0, angle),
            polar_point(frame.cx, frame.cy, 50.0, angle)
        );
        assert_eq!(polar_point(5.0, 7.0, 2.0, 0.0), (7.0, 7.0));
    }

    #[test]
    fn frame_validation_rejects_non_positive_radius() {
        let frame = PieFrame {
            radius: 0.0,
            ..PieFrame::default()
        };
        assert!(frame.validate().is_err());
        assert!(PieFrame::default().validate().is_ok());
    }
}
