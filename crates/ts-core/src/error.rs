//! Error types for table loading and validation.

use std::path::PathBuf;

/// Alias for `Result<T, TsError>`.
pub type TsResult<T> = Result<T, TsError>;

/// Errors that can occur when loading tables or templates from disk.
///
/// The resolution engine itself never returns these: a missing or broken
/// table degrades to a fallback at the source boundary. They surface only
/// from explicit load and validation entry points.
#[derive(Debug, thiserror::Error)]
pub enum TsError {
    /// A file or directory could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A file did not contain the expected JSON shape.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        /// The path that failed to parse.
        path: PathBuf,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}
