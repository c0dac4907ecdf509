//! Cross-cutting error types for Tempo.
//!
//! Domain-specific errors (board shape errors, HTTP failures, configuration
//! errors) live in their respective crates; everything converges into
//! `anyhow` in the CLI.

use thiserror::Error;

/// Errors raised by the core domain types.
///
/// Upload validation does not live here: it accumulates per-file message
/// lists in [`crate::upload::Validation`] instead of failing on the
/// first problem.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An endpoint display string did not parse.
    #[error("invalid endpoint '{0}': expected 'start|end|instant <entity-id>'")]
    EndpointParse(String),

    /// `apply_dct` was called on text that already carries the DCT label.
    /// Normalization must always start from the raw document.
    #[error("document is already DCT-normalized")]
    AlreadyNormalized,

    /// `strip_dct` was called on text without the DCT label.
    #[error("document is not DCT-normalized")]
    NotNormalized,

    /// An entity's offsets fall outside the document after translation.
    #[error("entity '{id}' has offsets outside the document")]
    OffsetOutOfBounds { id: String },
}
