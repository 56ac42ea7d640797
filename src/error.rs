//! Error types for the Flanker library.

use thiserror::Error;

/// Errors that can occur during Flanker operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A JSON document could not be decoded.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A parse error occurred while reading input data.
    #[error("{0}")]
    Parse(String),

    /// A validation constraint was violated.
    #[error("{0}")]
    Validation(String),

    /// A base with no complement partner was found while building a
    /// reverse complement.
    #[error("unknown base '{base}' at index {index}")]
    UnknownBase { index: usize, base: char },

    /// A transcript with no coding segment among its features.
    /// Arm computation is never attempted for these.
    #[error("no coding segment found for transcript: {0}")]
    NoCodingStart(String),

    /// A transcript whose placement description was absent or never parsed,
    /// asked for a placement-dependent computation.
    #[error("transcript has no usable genomic placement: {0}")]
    NoPlacement(String),
}
