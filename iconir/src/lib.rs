//! Intermediate representation for icon font compilation.
//!
//! Icons arrive as SVG path data. The [`store`] gives every distinct outline a
//! permanent key, [`path`] turns path data into absolute commands, and
//! [`interpret`] draws those commands into glyph outlines.

pub mod arc;
pub mod error;
pub mod glyph;
pub mod interpret;
pub mod path;
pub mod path_builder;
pub mod store;
