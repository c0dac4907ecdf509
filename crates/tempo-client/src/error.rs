//! Client error types.

use tempo_board::BoardError;
use thiserror::Error;

/// Message the backend returns when an undo has nothing to undo.
pub(crate) const NO_HISTORY_MESSAGE: &str = "No actions to undo";

/// Errors raised by backend calls and the session controllers.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failure (connection refused, timeout). Retryable;
    /// session state is unchanged.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the request with a non-2xx status. The message
    /// is the body's `error` field, surfaced verbatim.
    #[error("backend rejected the request ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// An undo was requested with no prior step to undo.
    #[error("no actions to undo")]
    NoHistory,

    /// Session creation requires at least two entities; issuing the call
    /// below that threshold is a caller bug, caught client-side.
    #[error("at least 2 entities are required for annotation, got {count}")]
    TooFewEntities { count: usize },

    /// Game levels run from 2 to 5.
    #[error("game level must be between 2 and 5, got {level}")]
    InvalidLevel { level: u8 },

    /// The returned board failed shape validation (endpoint/matrix count
    /// mismatch, ragged rows, unknown cell integers).
    #[error(transparent)]
    Board(#[from] BoardError),
}

impl ClientError {
    /// Recognize the backend's empty-history rejection on undo paths.
    pub(crate) fn into_undo(self) -> Self {
        match self {
            Self::Rejected { ref message, .. } if message == NO_HISTORY_MESSAGE => Self::NoHistory,
            other => other,
        }
    }
}
