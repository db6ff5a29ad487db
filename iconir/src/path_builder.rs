//! Accumulates a glyph outline, mapping every point into design space.

use icondrasil::coords::CoordTransform;
use kurbo::{BezPath, PathEl, Point};

use crate::error::PathError;

/// Builds one glyph's outline from icon space drawing operations.
///
/// Every point, control points included, goes through the same
/// [`CoordTransform`]. A builder belongs to exactly one icon; nothing it
/// accumulates is visible to any other.
#[derive(Debug)]
pub struct OutlineBuilder {
    transform: CoordTransform,
    path: Vec<PathEl>,
}

impl OutlineBuilder {
    pub fn new(transform: CoordTransform, estimated_num_elements: usize) -> OutlineBuilder {
        OutlineBuilder {
            transform,
            path: Vec::with_capacity(estimated_num_elements),
        }
    }

    fn check_started(&self) -> Result<(), PathError> {
        if self.path.is_empty() {
            return Err(PathError::MissingMoveTo);
        }
        Ok(())
    }

    fn t(&self, p: Point) -> Point {
        self.transform.apply(p)
    }

    /// Starts a new subpath at `p`.
    pub fn move_to(&mut self, p: impl Into<Point>) {
        self.path.push(PathEl::MoveTo(self.t(p.into())));
    }

    pub fn line_to(&mut self, p: impl Into<Point>) -> Result<(), PathError> {
        self.check_started()?;
        self.path.push(PathEl::LineTo(self.t(p.into())));
        Ok(())
    }

    pub fn curve_to(
        &mut self,
        c1: impl Into<Point>,
        c2: impl Into<Point>,
        p: impl Into<Point>,
    ) -> Result<(), PathError> {
        self.check_started()?;
        self.path.push(PathEl::CurveTo(
            self.t(c1.into()),
            self.t(c2.into()),
            self.t(p.into()),
        ));
        Ok(())
    }

    pub fn quad_to(&mut self, c1: impl Into<Point>, p: impl Into<Point>) -> Result<(), PathError> {
        self.check_started()?;
        self.path
            .push(PathEl::QuadTo(self.t(c1.into()), self.t(p.into())));
        Ok(())
    }

    pub fn close(&mut self) -> Result<(), PathError> {
        self.check_started()?;
        self.path.push(PathEl::ClosePath);
        Ok(())
    }

    pub fn build(self) -> BezPath {
        BezPath::from_vec(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> OutlineBuilder {
        OutlineBuilder::new(CoordTransform::new(24.0, 100.0, 0.0), 0)
    }

    #[test]
    fn flips_and_scales_every_point() {
        let mut builder = builder();
        builder.move_to((0.0, 0.0));
        builder.line_to((24.0, 24.0)).unwrap();
        builder.quad_to((12.0, 0.0), (0.0, 24.0)).unwrap();
        builder
            .curve_to((1.0, 2.0), (3.0, 4.0), (5.0, 6.0))
            .unwrap();
        builder.close().unwrap();
        assert_eq!(
            "M0,2400 L2400,0 Q1200,2400 0,0 C100,2200 300,2000 500,1800 Z",
            builder.build().to_svg()
        );
    }

    #[test]
    fn multiple_subpaths() {
        let mut builder = builder();
        builder.move_to((0.0, 0.0));
        builder.line_to((1.0, 0.0)).unwrap();
        builder.close().unwrap();
        builder.move_to((2.0, 2.0));
        builder.line_to((3.0, 2.0)).unwrap();
        assert_eq!(
            "M0,2400 L100,2400 Z M200,2200 L300,2200",
            builder.build().to_svg()
        );
    }

    #[test]
    fn must_move_first() {
        let mut builder = builder();
        assert!(matches!(
            builder.line_to((1.0, 1.0)),
            Err(PathError::MissingMoveTo)
        ));
        assert!(matches!(builder.close(), Err(PathError::MissingMoveTo)));
        assert!(builder.build().elements().is_empty());
    }
}
