//! Error types for decoy screening.

use thiserror::Error;

use crate::chem::ParseError;

/// Errors that can occur while configuring or running a screen.
#[derive(Debug, Error)]
pub enum Error {
    /// The reference molecule's SMILES could not be interpreted.
    #[error("invalid reference structure: {0}")]
    Reference(#[source] ParseError),

    /// A threshold value is outside its allowed range.
    #[error("invalid threshold: {0}")]
    InvalidThreshold(String),

    /// A threshold override file failed to parse.
    #[error("failed to parse threshold overrides: {0}")]
    ThresholdParse(#[from] toml::de::Error),

    /// The candidate source or output sink failed.
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
