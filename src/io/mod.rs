//! Candidate container formats.
//!
//! Both supported containers are treated as pass-through: the screener
//! decides which items to keep, and the writers emit the original bytes of
//! the kept items. Nothing here regenerates structure data.

use std::fmt;

pub mod sdf;
pub mod text;

/// Candidate source/sink formats accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// A bare SMILES string, no file involved.
    Smile,
    /// SDF structure-data file with an embedded SMILES data item per record.
    Sdf,
    /// Comma-delimited text, SMILES in the second column.
    Txt,
}

impl Format {
    /// File extension this format requires on input/output paths.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Smile => "smile",
            Format::Sdf => "sdf",
            Format::Txt => "txt",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Smile => write!(f, "smile"),
            Format::Sdf => write!(f, "SDF"),
            Format::Txt => write!(f, "text"),
        }
    }
}
