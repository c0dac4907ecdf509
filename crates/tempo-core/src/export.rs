//! Exported annotation document format.
//!
//! Export is a client-side download; nothing crosses the network. Entities
//! are written in the original (pre-DCT-normalization) coordinate space and
//! the synthetic DCT entity is excluded — the `dct` field carries the value
//! instead.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dct::strip_dct;
use crate::entity::{Entity, EntitySpan};
use crate::errors::CoreError;

/// A finished annotation document, as written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExportDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dct: Option<String>,
    pub entities: Vec<EntitySpan>,
    pub annotated_at: DateTime<Utc>,
    pub total_entities: usize,
}

impl ExportDocument {
    /// Build an export from annotation state.
    ///
    /// `text` and `entities` are the state as annotated — DCT-normalized
    /// when `dct` is present, raw otherwise. With a DCT the offsets are
    /// translated back and the synthetic entity dropped before writing.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotNormalized`] if `dct` is present but `text`
    /// does not carry the label line, and propagates offset-translation
    /// failures from [`strip_dct`].
    pub fn from_annotated(
        filename: Option<String>,
        text: &str,
        entities: &[Entity],
        dct: Option<&str>,
    ) -> Result<Self, CoreError> {
        let (text, entities) = if dct.is_some() {
            strip_dct(text, entities)?
        } else {
            (text.to_string(), entities.to_vec())
        };

        let spans: Vec<EntitySpan> = entities.iter().map(EntitySpan::from).collect();
        Ok(Self {
            filename,
            text,
            dct: dct.map(ToString::to_string),
            total_entities: spans.len(),
            entities: spans,
            annotated_at: Utc::now(),
        })
    }
}
