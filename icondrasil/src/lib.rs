//! Helper library for code that is of value to every stage of icon font compilation.

pub mod coords;
pub mod types;
