//! Build settings for an icon font

use std::{fs, path::Path};

use icondrasil::coords::CoordTransform;
use serde::{Deserialize, Serialize};

use crate::Error;

/// How to turn icons into a font.
///
/// Missing fields take their default when read from yaml, so a file
/// containing only `padding: 2` is fine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Options {
    /// Font family name
    pub name: String,
    pub style_name: String,
    /// Width and height of the square icons are drawn in
    pub size: f64,
    /// Design units per icon unit
    pub scale: f64,
    /// Trimmed from every edge of the icon square
    pub padding: f64,
    /// Maximum deviation of arc approximations, in icon units
    pub arc_tolerance: f64,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            name: "iconfont".to_string(),
            style_name: "Regular".to_string(),
            size: 24.0,
            scale: 100.0,
            padding: 0.0,
            arc_tolerance: 0.001,
        }
    }
}

impl Options {
    pub fn load(path: &Path) -> Result<Options, Error> {
        let yml = fs::read_to_string(path).map_err(|source| Error::FileIo {
            path: path.to_path_buf(),
            source,
        })?;
        let options: Options = serde_yaml::from_str(&yml)?;
        options.validate()?;
        Ok(options)
    }

    pub fn transform(&self) -> CoordTransform {
        CoordTransform::new(self.size, self.scale, self.padding)
    }

    pub fn validate(&self) -> Result<(), Error> {
        let numbers = [
            ("size", self.size),
            ("scale", self.scale),
            ("padding", self.padding),
            ("arc_tolerance", self.arc_tolerance),
        ];
        if let Some((field, value)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidOptions(format!("{field} is {value}")));
        }
        if self.size <= 0.0 || self.scale <= 0.0 {
            return Err(Error::InvalidOptions(format!(
                "size and scale must be positive, got {} and {}",
                self.size, self.scale
            )));
        }
        if self.padding < 0.0 || 2.0 * self.padding >= self.size {
            return Err(Error::InvalidOptions(format!(
                "padding {} leaves nothing of size {}",
                self.padding, self.size
            )));
        }
        if self.arc_tolerance <= 0.0 {
            return Err(Error::InvalidOptions(format!(
                "arc_tolerance must be positive, got {}",
                self.arc_tolerance
            )));
        }
        Ok(())
    }
}
