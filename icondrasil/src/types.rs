//! Basic types useful for icon font compilation.

use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// First code point of the Basic Multilingual Plane Private Use Area.
pub const PRIVATE_USE_BASE: u32 = 0xE000;

/// Last code point of the Basic Multilingual Plane Private Use Area.
pub const PRIVATE_USE_LAST: u32 = 0xF8FF;

/// Key (and glyph index) reserved for the missing glyph.
pub const NOTDEF_KEY: u32 = 0;

/// The largest key that still maps into the Private Use Area.
pub const MAX_KEY: u32 = PRIVATE_USE_LAST - PRIVATE_USE_BASE;

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GlyphName(SmolStr);

impl GlyphName {
    /// The name of the undefined glyph
    pub const NOTDEF: GlyphName = GlyphName(SmolStr::new_inline(".notdef"));

    pub fn new(s: impl AsRef<str>) -> Self {
        Self(SmolStr::new(s))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for GlyphName {
    fn from(value: String) -> Self {
        GlyphName(value.into())
    }
}

impl From<&str> for GlyphName {
    fn from(value: &str) -> Self {
        GlyphName(value.into())
    }
}

impl Debug for GlyphName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for GlyphName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for GlyphName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

// this means if you have a HashSet<GlyphName> you can use &str to check
// if an item is contained
impl std::borrow::Borrow<str> for GlyphName {
    fn borrow(&self) -> &str {
        self.0.borrow()
    }
}

impl PartialEq<&str> for GlyphName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// A code point in the Private Use Area, derived from a definition key.
///
/// There is deliberately no way to build one outside `U+E000..=U+F8FF`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct CodePoint(char);

impl CodePoint {
    /// The code point for a definition key, `None` if it falls past the Private Use Area.
    pub fn for_key(key: u32) -> Option<CodePoint> {
        if key > MAX_KEY {
            return None;
        }
        char::from_u32(PRIVATE_USE_BASE + key).map(CodePoint)
    }

    /// The key this code point was derived from.
    pub fn key(&self) -> u32 {
        self.to_u32() - PRIVATE_USE_BASE
    }

    pub fn to_u32(&self) -> u32 {
        self.0 as u32
    }

    pub fn to_char(&self) -> char {
        self.0
    }
}

impl Debug for CodePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "U+{:04X}", self.to_u32())
    }
}

impl Display for CodePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "U+{:04X}", self.to_u32())
    }
}

impl TryFrom<char> for CodePoint {
    type Error = String;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        (PRIVATE_USE_BASE..=PRIVATE_USE_LAST)
            .contains(&(value as u32))
            .then_some(CodePoint(value))
            .ok_or_else(|| format!("U+{:04X} is outside the Private Use Area", value as u32))
    }
}

impl From<CodePoint> for char {
    fn from(value: CodePoint) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_point_for_first_key() {
        let cp = CodePoint::for_key(1).unwrap();
        assert_eq!(0xE001, cp.to_u32());
        assert_eq!('\u{E001}', cp.to_char());
        assert_eq!(1, cp.key());
        assert_eq!("U+E001", format!("{cp}"));
    }

    #[test]
    fn code_point_ceiling() {
        assert_eq!(0xF8FF, CodePoint::for_key(MAX_KEY).unwrap().to_u32());
        assert_eq!(None, CodePoint::for_key(MAX_KEY + 1));
        assert_eq!(None, CodePoint::for_key(u32::MAX));
    }

    #[test]
    fn code_point_from_char_checks_range() {
        assert_eq!(CodePoint::for_key(MAX_KEY), CodePoint::try_from('\u{F8FF}').ok());
        assert_eq!(CodePoint::for_key(0), CodePoint::try_from('\u{E000}').ok());
        assert!(CodePoint::try_from('A').is_err());
        assert!(CodePoint::try_from('\u{F900}').is_err());
    }

    #[test]
    fn deserialized_code_point_stays_in_private_use_area() {
        let cp: CodePoint = serde_yaml::from_str("\"\u{E00A}\"").unwrap();
        assert_eq!(10, cp.key());
        assert_eq!(
            cp,
            serde_yaml::from_str::<CodePoint>(&serde_yaml::to_string(&cp).unwrap()).unwrap()
        );
        assert!(serde_yaml::from_str::<CodePoint>("A").is_err());
    }

    #[test]
    fn glyph_name_borrows_as_str() {
        let names = std::collections::HashSet::from([GlyphName::new("home")]);
        assert!(names.contains("home"));
        assert_eq!(GlyphName::NOTDEF, ".notdef");
    }
}
