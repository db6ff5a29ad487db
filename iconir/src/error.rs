use std::{io, path::PathBuf};

use icondrasil::types::GlyphName;
use thiserror::Error;

/// Problems converting a path command stream into an outline.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("invalid curve: '{command}' must immediately follow '{required}'")]
    MalformedPath { command: char, required: char },
    #[error("invalid arc: {0}")]
    InvalidArc(String),
    #[error("drawing started without a move")]
    MissingMoveTo,
    #[error("unable to tokenize path data: {0}")]
    Tokenize(#[from] svgtypes::Error),
}

/// A [`PathError`] along with the icon that caused it.
#[derive(Debug, Error)]
#[error("'{name}' cannot be drawn from \"{value}\": {source}")]
pub struct IconError {
    pub name: GlyphName,
    pub value: String,
    #[source]
    pub source: PathError,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unable to allocate {requested} new keys, only {available} private use code points remain")]
    AllocationExhausted { requested: usize, available: usize },
    #[error("corrupt snapshot '{path}': {reason}")]
    CorruptSnapshot { path: PathBuf, reason: String },
    #[error("io failed for '{path}': '{source}'")]
    FileIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    YamlError(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum GlyphError {
    #[error("'{name}' has an invalid advance width {advance}")]
    InvalidAdvance { name: GlyphName, advance: f64 },
}
