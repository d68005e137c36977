//! Crate-level error types.

use std::fmt;

/// Errors produced by the molvis crate.
#[derive(Debug)]
pub enum MolvisError {
    /// Structurally invalid molecule data (e.g. a bond referencing an
    /// atom index outside the atom list).
    MoleculeData(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for MolvisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoleculeData(msg) => {
                write!(f, "molecule data error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for MolvisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::MoleculeData(_) | Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for MolvisError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
