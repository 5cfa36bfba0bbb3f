//! Error types for the mealbot library.

use thiserror::Error;

/// Unified error type for the server loop.
///
/// Tool and upstream failures never reach this type; they are reported to
/// the host as `isError` tool results.
#[derive(Debug, Error)]
pub enum MealBotError {
    /// Reading the protocol stream failed
    #[error("Input error: {0}")]
    Input(#[from] tokio_util::codec::AnyDelimiterCodecError),

    /// Writing the protocol stream failed
    #[error("Codec error: {0}")]
    Codec(#[from] tokio_util::codec::LinesCodecError),

    /// A server task panicked or was cancelled
    #[error("Task error: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
