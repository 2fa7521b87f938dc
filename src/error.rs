use thiserror::Error;

use crate::models::{Axis, Notation};

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Coordinate out of range: {0}")]
    Range(#[from] RangeError),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

/// A structurally valid coordinate that falls outside the open interval of its axis.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{axis} {value} must be between -{bound} & {bound}", bound = .axis.bound())]
pub struct RangeError {
    pub axis: Axis,
    pub value: f64,
}

/// The two ways a single input line can fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unrecognized coordinate format: '{line}'")]
    NoStructuralMatch { line: String },

    #[error("{source} (matched as {notation})")]
    OutOfRange {
        notation: Notation,
        #[source]
        source: RangeError,
    },
}

impl ParseError {
    pub fn is_no_match(&self) -> bool {
        matches!(self, ParseError::NoStructuralMatch { .. })
    }

    pub fn range_error(&self) -> Option<&RangeError> {
        match self {
            ParseError::OutOfRange { source, .. } => Some(source),
            ParseError::NoStructuralMatch { .. } => None,
        }
    }
}
