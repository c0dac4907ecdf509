//! Document-creation-time normalization.
//!
//! Before a document with a DCT enters annotation, the creation time is
//! folded into the text as a synthetic first entity: a fixed-format label
//! line is prepended, every existing offset shifts by the label length, and
//! an `instant` entity covering exactly the DCT substring is inserted at
//! position 0 so it receives endpoint indices 0/1.
//!
//! Normalization is not idempotent on its own output. [`apply_dct`] refuses
//! already-normalized text; callers keep the raw document around and
//! normalize from it each time. [`strip_dct`] is the exact inverse and is
//! what export uses to translate offsets back.

use crate::entity::{Entity, EntityKind};
use crate::errors::CoreError;

/// Prefix of the synthetic label line, up to the DCT value itself.
pub const DCT_LABEL_PREFIX: &str = "Document creation time: ";

/// Id given to the synthetic DCT entity. Backends reassign positional ids
/// on session creation, so this only needs to be unique client-side.
pub const DCT_ENTITY_ID: &str = "dct";

/// A document with the DCT folded in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDocument {
    pub text: String,
    pub entities: Vec<Entity>,
}

/// Fold `dct` into `text` and `entities`.
///
/// # Errors
///
/// Returns [`CoreError::AlreadyNormalized`] if `text` already starts with
/// the DCT label — re-applying would double-prepend.
pub fn apply_dct(
    text: &str,
    entities: &[Entity],
    dct: &str,
) -> Result<NormalizedDocument, CoreError> {
    if text.starts_with(DCT_LABEL_PREFIX) {
        return Err(CoreError::AlreadyNormalized);
    }

    let label = format!("{DCT_LABEL_PREFIX}{dct}\n");
    let shift = label.len();

    let mut shifted = Vec::with_capacity(entities.len() + 1);
    shifted.push(Entity {
        id: DCT_ENTITY_ID.to_string(),
        text: dct.to_string(),
        start: DCT_LABEL_PREFIX.len(),
        end: DCT_LABEL_PREFIX.len() + dct.len(),
        kind: EntityKind::Instant,
        is_dct: true,
    });
    for entity in entities {
        let mut entity = entity.clone();
        entity.start += shift;
        entity.end += shift;
        shifted.push(entity);
    }

    Ok(NormalizedDocument {
        text: format!("{label}{text}"),
        entities: shifted,
    })
}

/// Undo [`apply_dct`]: drop the label line and the synthetic entity, and
/// shift every remaining offset back into the original coordinate space.
///
/// # Errors
///
/// Returns [`CoreError::NotNormalized`] if `text` does not carry the DCT
/// label, and [`CoreError::OffsetOutOfBounds`] if an entity's offsets fall
/// inside the label region.
pub fn strip_dct(text: &str, entities: &[Entity]) -> Result<(String, Vec<Entity>), CoreError> {
    if !text.starts_with(DCT_LABEL_PREFIX) {
        return Err(CoreError::NotNormalized);
    }
    let newline = text.find('\n').ok_or(CoreError::NotNormalized)?;
    let shift = newline + 1;

    let mut restored = Vec::with_capacity(entities.len().saturating_sub(1));
    for entity in entities.iter().filter(|entity| !entity.is_dct) {
        let out_of_bounds = || CoreError::OffsetOutOfBounds {
            id: entity.id.clone(),
        };
        let start = entity.start.checked_sub(shift).ok_or_else(out_of_bounds)?;
        let end = entity.end.checked_sub(shift).ok_or_else(out_of_bounds)?;
        restored.push(Entity {
            start,
            end,
            ..entity.clone()
        });
    }

    Ok((text[shift..].to_string(), restored))
}
