//! Writing a compiled glyph set out as a font file.

use std::fmt::Write;

use quick_xml::escape::escape;

use crate::{Error, GlyphSet};

/// Produces a font file from a glyph set.
pub trait FontSerializer {
    fn serialize(&self, glyph_set: &GlyphSet) -> Result<Vec<u8>, Error>;
}

/// Writes an [SVG font](https://www.w3.org/TR/SVG11/fonts.html).
///
/// Glyph outlines are already in design space (Y up, baseline origin), which
/// is what SVG fonts expect.
#[derive(Debug, Default, Clone, Copy)]
pub struct SvgFontSerializer;

impl FontSerializer for SvgFontSerializer {
    fn serialize(&self, glyph_set: &GlyphSet) -> Result<Vec<u8>, Error> {
        let metrics = &glyph_set.metrics;
        let family = escape(glyph_set.family_name.as_str());
        let font_style = if glyph_set.style_name.to_ascii_lowercase().contains("italic") {
            "italic"
        } else {
            "normal"
        };

        let mut svg = String::new();
        writeln!(svg, r#"<?xml version="1.0" standalone="no"?>"#)?;
        writeln!(svg, r#"<svg xmlns="http://www.w3.org/2000/svg">"#)?;
        writeln!(svg, "<defs>")?;
        writeln!(
            svg,
            r#"<font id="{family}" horiz-adv-x="{}">"#,
            metrics.advance_width
        )?;
        writeln!(
            svg,
            r#"<font-face font-family="{family}" font-style="{font_style}" units-per-em="{}" ascent="{}" descent="{}"/>"#,
            metrics.units_per_em, metrics.ascender, metrics.descender
        )?;
        for glyph in glyph_set.glyphs.iter() {
            let Some(code_point) = glyph.code_point() else {
                writeln!(
                    svg,
                    r#"<missing-glyph horiz-adv-x="{}"/>"#,
                    glyph.advance_width()
                )?;
                continue;
            };
            writeln!(
                svg,
                r#"<glyph glyph-name="{}" unicode="&#x{:X};" horiz-adv-x="{}" d="{}"/>"#,
                escape(glyph.name().as_str()),
                code_point.to_u32(),
                glyph.advance_width(),
                glyph.outline().to_svg()
            )?;
        }
        writeln!(svg, "</font>")?;
        writeln!(svg, "</defs>")?;
        writeln!(svg, "</svg>")?;
        Ok(svg.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use icondrasil::{coords::CoordTransform, types::CodePoint};
    use iconir::glyph::{FontMetrics, Glyph};
    use kurbo::BezPath;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn writes_every_glyph() {
        let metrics = FontMetrics::new(&CoordTransform::new(24.0, 100.0, 0.0));
        let mut outline = BezPath::new();
        outline.move_to((0.0, 2400.0));
        outline.line_to((2400.0, 0.0));
        outline.close_path();
        let glyph_set = GlyphSet {
            family_name: "icons & more".to_string(),
            style_name: "Regular".to_string(),
            metrics,
            glyphs: vec![
                Glyph::notdef(2400.0).unwrap(),
                Glyph::new(1, "home".into(), CodePoint::for_key(1), 2400.0, outline).unwrap(),
            ],
        };

        let svg = String::from_utf8(SvgFontSerializer.serialize(&glyph_set).unwrap()).unwrap();
        assert_eq!(
            vec![
                r#"<?xml version="1.0" standalone="no"?>"#,
                r#"<svg xmlns="http://www.w3.org/2000/svg">"#,
                "<defs>",
                r#"<font id="icons &amp; more" horiz-adv-x="2400">"#,
                r#"<font-face font-family="icons &amp; more" font-style="normal" units-per-em="2400" ascent="2400" descent="0"/>"#,
                r#"<missing-glyph horiz-adv-x="2400"/>"#,
                r#"<glyph glyph-name="home" unicode="&#xE001;" horiz-adv-x="2400" d="M0,2400 L2400,0 Z"/>"#,
                "</font>",
                "</defs>",
                "</svg>",
            ],
            svg.lines().collect::<Vec<_>>()
        );
    }
}
