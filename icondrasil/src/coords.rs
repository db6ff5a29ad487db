//! Icon space and glyph design space are not the same thing; don't mix them.
//!
//! Icon coordinates live in a `size` x `size` square with the origin at the top
//! left and Y growing downwards. Design space has the origin on the baseline and
//! Y growing upwards, measured in font units.

use kurbo::{Affine, Point};
use serde::{Deserialize, Serialize};

/// Maps icon space coordinates to glyph design space.
///
/// `padding` is trimmed from all four edges before the Y axis is flipped and
/// everything is scaled to design units.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CoordTransform {
    pub size: f64,
    pub scale: f64,
    pub padding: f64,
}

impl CoordTransform {
    pub fn new(size: f64, scale: f64, padding: f64) -> CoordTransform {
        CoordTransform {
            size,
            scale,
            padding,
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.padding) * self.scale,
            (self.size - p.y - self.padding) * self.scale,
        )
    }

    /// The same mapping as [`CoordTransform::apply`], for transforming whole paths.
    pub fn affine(&self) -> Affine {
        Affine::new([
            self.scale,
            0.0,
            0.0,
            -self.scale,
            -self.padding * self.scale,
            (self.size - self.padding) * self.scale,
        ])
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use rstest::rstest;

    use super::CoordTransform;

    #[rstest]
    #[case::top_left((0.0, 0.0), (0.0, 2400.0))]
    #[case::bottom_right((24.0, 24.0), (2400.0, 0.0))]
    #[case::center((12.0, 12.0), (1200.0, 1200.0))]
    #[case::outside((-1.0, 25.0), (-100.0, -100.0))]
    fn unpadded(#[case] icon: (f64, f64), #[case] design: (f64, f64)) {
        let transform = CoordTransform::new(24.0, 100.0, 0.0);
        assert_eq!(Point::from(design), transform.apply(icon.into()));
    }

    #[test]
    fn padding_trims_every_edge() {
        let transform = CoordTransform::new(24.0, 100.0, 2.0);
        assert_eq!(Point::new(0.0, 2000.0), transform.apply((2.0, 2.0).into()));
        assert_eq!(Point::new(2000.0, 0.0), transform.apply((22.0, 22.0).into()));
        assert_eq!(
            Point::new(-200.0, 2200.0),
            transform.apply((0.0, 0.0).into())
        );
    }

    #[test]
    fn affine_matches_apply() {
        let transform = CoordTransform::new(32.0, 10.0, 1.5);
        for p in [(0.0, 0.0), (3.25, 17.0), (32.0, 32.0), (-4.0, 40.0)] {
            let p = Point::from(p);
            let expected = transform.apply(p);
            let actual = transform.affine() * p;
            assert!(
                (expected - actual).hypot() < 1e-9,
                "{expected:?} != {actual:?}"
            );
        }
    }
}
