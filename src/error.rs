//! Crate-level error types.

use std::fmt;

/// Which input coordinate failed finiteness validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidGeometry {
    /// The viewer position contained a NaN or infinite component.
    Viewer,
    /// An instance anchor contained a NaN or infinite component.
    Anchor {
        /// Zero-based position of the offending instance in the
        /// submitted sequence.
        index: usize,
    },
}

impl fmt::Display for InvalidGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewer => {
                write!(f, "non-finite viewer position")
            }
            Self::Anchor { index } => {
                write!(f, "non-finite anchor at instance {index}")
            }
        }
    }
}

/// Errors produced by the lagoon crate.
#[derive(Debug)]
pub enum LagoonError {
    /// A world-space coordinate was NaN or infinite.
    InvalidGeometry(InvalidGeometry),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML viewer-state parsing/serialization failure.
    StateParse(String),
}

impl fmt::Display for LagoonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry(detail) => {
                write!(f, "invalid geometry: {detail}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::StateParse(msg) => {
                write!(f, "viewer state parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for LagoonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvalidGeometry> for LagoonError {
    fn from(detail: InvalidGeometry) -> Self {
        Self::InvalidGeometry(detail)
    }
}

impl From<std::io::Error> for LagoonError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
