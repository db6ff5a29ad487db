use std::{io, path::PathBuf};

use iconir::error::{GlyphError, IconError, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io failed for '{path}': '{source}'")]
    FileIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("{} icons could not be drawn", .0.len())]
    IconFailures(Vec<IconError>),
    #[error(transparent)]
    YamlError(#[from] serde_yaml::Error),
    #[error(transparent)]
    StoreError(#[from] StoreError),
    #[error(transparent)]
    GlyphError(#[from] GlyphError),
    #[error("unable to write font: {0}")]
    WriteError(#[from] std::fmt::Error),
}
