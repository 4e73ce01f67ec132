use std::path::PathBuf;

use thiserror::Error;

/// Failures at the edges of the crate (files, JSON, filters).
///
/// The generators themselves never fail.
#[derive(Debug, Error)]
pub enum SoapGenError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON that does not describe an operation.
    #[error("at JSON path {path} → {message}")]
    Decode { path: String, message: String },

    #[error("jq filter failed: {0}")]
    Filter(String),

    #[error("glob pattern matched no files: {0}")]
    NoMatches(String),

    #[error(transparent)]
    Pattern(#[from] glob::PatternError),

    #[error(transparent)]
    Glob(#[from] glob::GlobError),
}

pub type Result<T, E = SoapGenError> = std::result::Result<T, E>;
