//! Path commands, already resolved to absolute coordinates.

use kurbo::{Point, Vec2};
use log::trace;
use svgtypes::{PathParser, PathSegment};

use crate::{arc::ArcParams, error::PathError};

/// One drawing command with absolute coordinates in icon space.
///
/// Every command knows where it starts (`from`), which is the end of the
/// command before it.
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo {
        from: Point,
        to: Point,
    },
    /// Horizontal and vertical lines are lines too.
    LineTo {
        from: Point,
        to: Point,
    },
    CubicTo {
        from: Point,
        c1: Point,
        c2: Point,
        to: Point,
    },
    /// A cubic whose first control point mirrors the previous cubic's second.
    SmoothCubicTo {
        from: Point,
        c2: Point,
        to: Point,
    },
    QuadTo {
        from: Point,
        c1: Point,
        to: Point,
    },
    /// A quadratic whose control point mirrors the previous quadratic's.
    SmoothQuadTo {
        from: Point,
        to: Point,
    },
    ArcTo(ArcParams),
    /// Closes the current subpath; `to` is where the subpath started.
    ClosePath {
        from: Point,
        to: Point,
    },
    /// Something a tokenizer produced but couldn't classify.
    Unrecognized {
        tag: char,
    },
}

impl PathCommand {
    /// The SVG command letter, absolute form.
    pub fn tag(&self) -> char {
        match self {
            PathCommand::MoveTo { .. } => 'M',
            PathCommand::LineTo { .. } => 'L',
            PathCommand::CubicTo { .. } => 'C',
            PathCommand::SmoothCubicTo { .. } => 'S',
            PathCommand::QuadTo { .. } => 'Q',
            PathCommand::SmoothQuadTo { .. } => 'T',
            PathCommand::ArcTo(..) => 'A',
            PathCommand::ClosePath { .. } => 'Z',
            PathCommand::Unrecognized { tag } => *tag,
        }
    }
}

/// Turns raw path data into absolute [`PathCommand`]s.
pub trait PathTokenizer: Send + Sync {
    fn tokenize(&self, value: &str) -> Result<Vec<PathCommand>, PathError>;
}

/// Tokenizes SVG path data (the `d` attribute).
///
/// Relative commands are resolved against the current point, `H` and `V`
/// become lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct SvgPathTokenizer;

fn resolve(abs: bool, current: Point, x: f64, y: f64) -> Point {
    if abs {
        Point::new(x, y)
    } else {
        current + Vec2::new(x, y)
    }
}

impl PathTokenizer for SvgPathTokenizer {
    fn tokenize(&self, value: &str) -> Result<Vec<PathCommand>, PathError> {
        let mut commands = Vec::new();
        let mut current = Point::ZERO;
        let mut subpath_start = Point::ZERO;

        for segment in PathParser::from(value) {
            let from = current;
            let command = match segment? {
                PathSegment::MoveTo { abs, x, y } => {
                    let to = resolve(abs, from, x, y);
                    subpath_start = to;
                    PathCommand::MoveTo { from, to }
                }
                PathSegment::LineTo { abs, x, y } => PathCommand::LineTo {
                    from,
                    to: resolve(abs, from, x, y),
                },
                PathSegment::HorizontalLineTo { abs, x } => PathCommand::LineTo {
                    from,
                    to: resolve(abs, from, x, if abs { from.y } else { 0.0 }),
                },
                PathSegment::VerticalLineTo { abs, y } => PathCommand::LineTo {
                    from,
                    to: resolve(abs, from, if abs { from.x } else { 0.0 }, y),
                },
                PathSegment::CurveTo {
                    abs,
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => PathCommand::CubicTo {
                    from,
                    c1: resolve(abs, from, x1, y1),
                    c2: resolve(abs, from, x2, y2),
                    to: resolve(abs, from, x, y),
                },
                PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => PathCommand::SmoothCubicTo {
                    from,
                    c2: resolve(abs, from, x2, y2),
                    to: resolve(abs, from, x, y),
                },
                PathSegment::Quadratic { abs, x1, y1, x, y } => PathCommand::QuadTo {
                    from,
                    c1: resolve(abs, from, x1, y1),
                    to: resolve(abs, from, x, y),
                },
                PathSegment::SmoothQuadratic { abs, x, y } => PathCommand::SmoothQuadTo {
                    from,
                    to: resolve(abs, from, x, y),
                },
                PathSegment::EllipticalArc {
                    abs,
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    x,
                    y,
                } => PathCommand::ArcTo(ArcParams {
                    from,
                    to: resolve(abs, from, x, y),
                    radii: Vec2::new(rx, ry),
                    x_rotation: x_axis_rotation,
                    large_arc,
                    sweep,
                }),
                PathSegment::ClosePath { .. } => PathCommand::ClosePath {
                    from,
                    to: subpath_start,
                },
            };
            current = match &command {
                PathCommand::MoveTo { to, .. }
                | PathCommand::LineTo { to, .. }
                | PathCommand::CubicTo { to, .. }
                | PathCommand::SmoothCubicTo { to, .. }
                | PathCommand::QuadTo { to, .. }
                | PathCommand::SmoothQuadTo { to, .. }
                | PathCommand::ClosePath { to, .. } => *to,
                PathCommand::ArcTo(arc) => arc.to,
                PathCommand::Unrecognized { .. } => current,
            };
            trace!("{command:?}");
            commands.push(command);
        }
        Ok(commands)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};
    use pretty_assertions::assert_eq;

    use super::*;

    fn tokenize(value: &str) -> Vec<PathCommand> {
        SvgPathTokenizer.tokenize(value).unwrap()
    }

    #[test]
    fn absolute_commands() {
        assert_eq!(
            vec![
                PathCommand::MoveTo {
                    from: Point::ZERO,
                    to: Point::new(1.0, 2.0)
                },
                PathCommand::CubicTo {
                    from: Point::new(1.0, 2.0),
                    c1: Point::new(3.0, 4.0),
                    c2: Point::new(5.0, 6.0),
                    to: Point::new(7.0, 8.0)
                },
                PathCommand::SmoothCubicTo {
                    from: Point::new(7.0, 8.0),
                    c2: Point::new(9.0, 10.0),
                    to: Point::new(11.0, 12.0)
                },
                PathCommand::ClosePath {
                    from: Point::new(11.0, 12.0),
                    to: Point::new(1.0, 2.0)
                },
            ],
            tokenize("M1,2 C3,4 5,6 7,8 S9,10 11,12 Z")
        );
    }

    #[test]
    fn relative_commands_become_absolute() {
        assert_eq!(
            vec![
                PathCommand::MoveTo {
                    from: Point::ZERO,
                    to: Point::new(2.0, 2.0)
                },
                PathCommand::LineTo {
                    from: Point::new(2.0, 2.0),
                    to: Point::new(5.0, 6.0)
                },
                PathCommand::QuadTo {
                    from: Point::new(5.0, 6.0),
                    c1: Point::new(6.0, 6.0),
                    to: Point::new(7.0, 8.0)
                },
                PathCommand::SmoothQuadTo {
                    from: Point::new(7.0, 8.0),
                    to: Point::new(9.0, 8.0)
                },
            ],
            tokenize("m2 2 l3 4 q1 0 2 2 t2 0")
        );
    }

    #[test]
    fn horizontal_and_vertical_are_lines() {
        let ends: Vec<_> = tokenize("M1 1 H5 V7 h-2 v-3")
            .into_iter()
            .filter_map(|c| match c {
                PathCommand::LineTo { to, .. } => Some(to),
                _ => None,
            })
            .collect();
        assert_eq!(
            vec![
                Point::new(5.0, 1.0),
                Point::new(5.0, 7.0),
                Point::new(3.0, 7.0),
                Point::new(3.0, 4.0),
            ],
            ends
        );
    }

    #[test]
    fn close_returns_to_subpath_start() {
        let commands = tokenize("M10 10 L20 10 Z l0 5");
        assert_eq!(
            PathCommand::LineTo {
                from: Point::new(10.0, 10.0),
                to: Point::new(10.0, 15.0)
            },
            commands[3]
        );
    }

    #[test]
    fn implicit_lines_after_move() {
        let tags: String = tokenize("M0 0 10 0 10 10z").iter().map(|c| c.tag()).collect();
        assert_eq!("MLLZ", tags);
    }

    #[test]
    fn relative_arc() {
        let commands = tokenize("M12 2 a10 5 30 1 0 4 4");
        assert_eq!(
            PathCommand::ArcTo(ArcParams {
                from: Point::new(12.0, 2.0),
                to: Point::new(16.0, 6.0),
                radii: Vec2::new(10.0, 5.0),
                x_rotation: 30.0,
                large_arc: true,
                sweep: false,
            }),
            commands[1]
        );
    }

    #[test]
    fn garbage_is_an_error() {
        let result = SvgPathTokenizer.tokenize("M0 0 L10 banana");
        assert!(matches!(result, Err(PathError::Tokenize(..))), "{result:?}");
    }

    #[test]
    fn empty_path_has_no_commands() {
        assert!(tokenize("").is_empty());
    }
}
