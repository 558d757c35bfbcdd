use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// One instruction of the 2D vector path grammar (SVG `d` subset).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    /// Elliptical arc from the current point to `(x, y)`.
    ArcTo {
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    Close,
}

impl PathCommand {
    /// End point of the command, `None` for `Close`.
    #[must_use]
    pub fn end_point(self) -> Option<(f64, f64)> {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } | Self::ArcTo { x, y, .. } => {
                Some((x, y))
            }
            Self::Close => None,
        }
    }

    fn is_finite(self) -> bool {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => x.is_finite() && y.is_finite(),
            Self::ArcTo {
                rx,
                ry,
                x_axis_rotation,
                x,
                y,
                ..
            } => [rx, ry, x_axis_rotation, x, y].iter().all(|v| v.is_finite()),
            Self::Close => true,
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::MoveTo { x, y } => write!(f, "M {x} {y}"),
            Self::LineTo { x, y } => write!(f, "L {x} {y}"),
            Self::ArcTo {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => write!(
                f,
                "A {rx} {ry} {x_axis_rotation} {} {} {x} {y}",
                u8::from(large_arc),
                u8::from(sweep)
            ),
            Self::Close => f.write_str("Z"),
        }
    }
}

/// Ordered path instructions.
///
/// Displays as an SVG path `d` attribute and serializes to that string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 4]>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::MoveTo { x, y });
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::LineTo { x, y });
        self
    }

    /// Circular arc (`rx == ry == radius`, no rotation) to `(x, y)`.
    pub fn arc_to(
        &mut self,
        radius: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> &mut Self {
        self.commands.push(PathCommand::ArcTo {
            rx: radius,
            ry: radius,
            x_axis_rotation: 0.0,
            large_arc,
            sweep,
            x,
            y,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// End points of all drawing commands in order.
    #[must_use]
    pub fn vertices(&self) -> Vec<(f64, f64)> {
        self.commands
            .iter()
            .filter_map(|command| command.end_point())
            .collect()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.commands.iter().any(|command| !command.is_finite()) {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        match self.commands.first() {
            None | Some(PathCommand::MoveTo { .. }) => Ok(()),
            Some(_) => Err(ChartError::InvalidData(
                "path must start with a move-to command".to_owned(),
            )),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, command) in self.commands.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut tokens = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty());
        let mut path = Path::new();

        while let Some(token) = tokens.next() {
            match token {
                "M" => {
                    let [x, y]: [f64; 2] = take_numbers(&mut tokens, "M")?;
                    path.move_to(x, y);
                }
                "L" => {
                    let [x, y]: [f64; 2] = take_numbers(&mut tokens, "L")?;
                    path.line_to(x, y);
                }
                "A" => {
                    let [rx, ry, x_axis_rotation, large_arc, sweep, x, y]: [f64; 7] =
                        take_numbers(&mut tokens, "A")?;
                    path.commands.push(PathCommand::ArcTo {
                        rx,
                        ry,
                        x_axis_rotation,
                        large_arc: parse_flag(large_arc)?,
                        sweep: parse_flag(sweep)?,
                        x,
                        y,
                    });
                }
                "Z" | "z" => {
                    path.close();
                }
                other => {
                    return Err(ChartError::InvalidData(format!(
                        "unsupported path command `{other}`"
                    )));
                }
            }
        }

        Ok(path)
    }
}

fn take_numbers<'a, const N: usize>(
    tokens: &mut impl Iterator<Item = &'a str>,
    command: &str,
) -> ChartResult<[f64; N]> {
    let mut values = [0.0; N];
    for slot in &mut values {
        let token = tokens.next().ok_or_else(|| {
            ChartError::InvalidData(format!("path command `{command}` expects {N} numbers"))
        })?;
        *slot = token.parse::<f64>().map_err(|e| {
            ChartError::InvalidData(format!("invalid number `{token}` in path: {e}"))
        })?;
    }
    Ok(values)
}

fn parse_flag(value: f64) -> ChartResult<bool> {
    if value == 0.0 {
        Ok(false)
    } else if value == 1.0 {
        Ok(true)
    } else {
        Err(ChartError::InvalidData(format!(
            "arc flag must be 0 or 1, got {value}"
        )))
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::{Path, PathCommand};

    #[test]
    fn display_uses_svg_grammar() {
        let mut path = Path::new();
        path.move_to(180.0, 160.0)
            .line_to(180.0, 30.0)
            .arc_to(130.0, false, true, 310.0, 160.0)
            .close();
        assert_eq!(
            path.to_string(),
            "M 180 160 L 180 30 A 130 130 0 0 1 310 160 Z"
        );
    }

    #[test]
    fn parse_accepts_commas_and_lowercase_close() {
        let path: Path = "M 1,2 L 3.5,4 z".parse().expect("parse");
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo { x: 1.0, y: 2.0 },
                PathCommand::LineTo { x: 3.5, y: 4.0 },
                PathCommand::Close,
            ]
        );
    }

    #[test]
    fn parse_rejects_bad_arc_flag() {
        assert!("M 0 0 A 1 1 0 2 1 5 5".parse::<Path>().is_err());
        assert!("M 0".parse::<Path>().is_err());
        assert!("Q 0 0".parse::<Path>().is_err());
    }

    #[test]
    fn validate_requires_leading_move() {
        let mut path = Path::new();
        path.line_to(1.0, 1.0);
        assert!(path.validate().is_err());

        let mut path = Path::new();
        path.move_to(0.0, f64::NAN);
        assert!(path.validate().is_err());
    }
}
