//! Elliptical arcs, approximated with cubic beziers.

use kurbo::{Arc, Point, SvgArc, Vec2};

use crate::error::PathError;

/// An SVG elliptical arc in absolute icon coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcParams {
    pub from: Point,
    pub to: Point,
    pub radii: Vec2,
    /// Rotation of the ellipse's x axis, in degrees.
    pub x_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

/// One cubic bezier, starting wherever the previous segment ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub c1: Point,
    pub c2: Point,
    pub to: Point,
}

pub trait ArcExpander: Send + Sync {
    /// Cubic segments running from `arc.from` to `arc.to`, in order.
    fn expand(&self, arc: &ArcParams) -> Result<Vec<CubicSegment>, PathError>;
}

/// Expands arcs using kurbo's arc approximation.
#[derive(Debug, Clone, Copy)]
pub struct KurboArcExpander {
    tolerance: f64,
}

impl KurboArcExpander {
    /// `tolerance` is the maximum distance from the true arc, in icon units.
    pub fn new(tolerance: f64) -> KurboArcExpander {
        KurboArcExpander { tolerance }
    }
}

impl Default for KurboArcExpander {
    fn default() -> Self {
        KurboArcExpander::new(0.001)
    }
}

impl ArcExpander for KurboArcExpander {
    fn expand(&self, arc: &ArcParams) -> Result<Vec<CubicSegment>, PathError> {
        let finite = [
            arc.from.x,
            arc.from.y,
            arc.to.x,
            arc.to.y,
            arc.radii.x,
            arc.radii.y,
            arc.x_rotation,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(PathError::InvalidArc(format!("non-finite parameter in {arc:?}")));
        }
        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return Err(PathError::InvalidArc(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        // An arc to where we already are draws nothing
        if arc.from == arc.to {
            return Ok(Vec::new());
        }

        let svg_arc = SvgArc {
            from: arc.from,
            to: arc.to,
            radii: Vec2::new(arc.radii.x.abs(), arc.radii.y.abs()),
            x_rotation: arc.x_rotation.to_radians(),
            large_arc: arc.large_arc,
            sweep: arc.sweep,
        };
        let Some(ellipse_arc) = Arc::from_svg_arc(&svg_arc) else {
            // zero radius, it's a straight line
            return Ok(vec![CubicSegment {
                c1: arc.from,
                c2: arc.to,
                to: arc.to,
            }]);
        };

        let mut segments = Vec::new();
        ellipse_arc.to_cubic_beziers(self.tolerance, |c1, c2, to| {
            segments.push(CubicSegment { c1, c2, to })
        });
        // Land exactly on the requested endpoint so following commands connect
        if let Some(last) = segments.last_mut() {
            last.to = arc.to;
        }
        Ok(segments)
    }
}
