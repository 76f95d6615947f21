//! Typed errors for the pipeline library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during a pipeline run.
///
/// Provider errors are fatal to the current invocation; nothing is retried
/// and no partial results are returned.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Topic failed validation; no provider was called
    #[error("invalid topic: {reason}")]
    InvalidTopic { reason: String },

    /// Search provider unavailable or failed
    #[error("search provider error: {0}")]
    Search(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Completion provider unavailable or failed
    #[error("completion provider error: {0}")]
    Completion(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error (missing or invalid credentials)
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
