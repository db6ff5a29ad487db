//! Glyph records and the font-wide metrics they share.

use icondrasil::{
    coords::CoordTransform,
    types::{CodePoint, GlyphName, NOTDEF_KEY},
};
use kurbo::BezPath;
use serde::{Deserialize, Serialize};

use crate::error::GlyphError;

/// Vertical metrics and the shared advance, all in design units.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub units_per_em: f64,
    pub ascender: f64,
    pub descender: f64,
    /// Every glyph is exactly as wide as the trimmed icon square.
    pub advance_width: f64,
}

impl FontMetrics {
    pub fn new(transform: &CoordTransform) -> FontMetrics {
        let CoordTransform {
            size,
            scale,
            padding,
        } = *transform;
        let em = (size - 2.0 * padding) * scale;
        FontMetrics {
            units_per_em: em,
            ascender: (size - padding) * scale,
            // 0.0, not -0.0, when unpadded
            descender: 0.0 - padding * scale,
            advance_width: em,
        }
    }
}

/// A finished glyph.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Glyph {
    index: u32,
    name: GlyphName,
    code_point: Option<CodePoint>,
    advance_width: f64,
    outline: BezPath,
}

impl Glyph {
    pub fn new(
        index: u32,
        name: GlyphName,
        code_point: Option<CodePoint>,
        advance_width: f64,
        outline: BezPath,
    ) -> Result<Glyph, GlyphError> {
        if !advance_width.is_finite() || advance_width < 0.0 {
            return Err(GlyphError::InvalidAdvance {
                name,
                advance: advance_width,
            });
        }
        Ok(Glyph {
            index,
            name,
            code_point,
            advance_width,
            outline,
        })
    }

    /// The glyph shown for characters the font doesn't have: index 0, no code point, no outline.
    pub fn notdef(advance_width: f64) -> Result<Glyph, GlyphError> {
        Glyph::new(
            NOTDEF_KEY,
            GlyphName::NOTDEF,
            None,
            advance_width,
            BezPath::new(),
        )
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn name(&self) -> &GlyphName {
        &self.name
    }

    pub fn code_point(&self) -> Option<CodePoint> {
        self.code_point
    }

    pub fn advance_width(&self) -> f64 {
        self.advance_width
    }

    pub fn outline(&self) -> &BezPath {
        &self.outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_without_padding() {
        let metrics = FontMetrics::new(&CoordTransform::new(24.0, 100.0, 0.0));
        assert_eq!(
            FontMetrics {
                units_per_em: 2400.0,
                ascender: 2400.0,
                descender: 0.0,
                advance_width: 2400.0,
            },
            metrics
        );
    }

    #[test]
    fn metrics_with_padding() {
        let metrics = FontMetrics::new(&CoordTransform::new(24.0, 100.0, 2.0));
        assert_eq!(2000.0, metrics.units_per_em);
        assert_eq!(2200.0, metrics.ascender);
        assert_eq!(-200.0, metrics.descender);
        assert_eq!(2000.0, metrics.advance_width);
    }

    #[test]
    fn notdef_is_empty() {
        let notdef = Glyph::notdef(2400.0).unwrap();
        assert_eq!(0, notdef.index());
        assert_eq!(GlyphName::NOTDEF, *notdef.name());
        assert_eq!(None, notdef.code_point());
        assert!(notdef.outline().elements().is_empty());
    }

    #[test]
    fn negative_advance_is_rejected() {
        let result = Glyph::new(1, "bad".into(), CodePoint::for_key(1), -1.0, BezPath::new());
        assert!(matches!(
            result,
            Err(GlyphError::InvalidAdvance { advance, .. }) if advance == -1.0
        ));
        assert!(Glyph::notdef(f64::NAN).is_err());
    }
}
