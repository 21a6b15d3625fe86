//! errors.rs - Custom error types for the rangecut-core library.
//!
//! This module defines a structured error enum for the library. Source and
//! sink failures carry the path they refer to so the caller can present them
//! without re-deriving context.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types produced by the `rangecut-core` library.
///
/// The scanner itself never fails on in-memory input; these variants cover
/// marker compilation, configuration and the document boundaries.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RangecutError {
    #[error("Failed to compile marker '{0}': {1}")]
    MarkerCompilationError(String, regex::Error),

    #[error("Marker '{0}': text length ({1}) exceeds maximum allowed ({2})")]
    MarkerLengthExceeded(String, usize, usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read document '{path}': {source}")]
    SourceRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to write document '{path}': {source}")]
    SinkWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    SerializationError(String),
}

impl RangecutError {
    /// True for failures on the input side of a clean operation.
    pub fn is_source_error(&self) -> bool {
        matches!(self, RangecutError::SourceRead { .. } | RangecutError::UnsupportedFormat(_))
    }

    /// True for failures while persisting output.
    pub fn is_sink_error(&self) -> bool {
        matches!(self, RangecutError::SinkWrite { .. })
    }
}
