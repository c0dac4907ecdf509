//! Temporal entities and detected spans.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an entity occupies a stretch of time or a single instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    #[default]
    Interval,
    Instant,
}

impl EntityKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Interval => "interval",
            Self::Instant => "instant",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A temporal entity anchored to a span of the document text.
///
/// Offsets are byte positions into the document, `start < end`. The
/// document-creation-time entity is synthesized by [`crate::dct::apply_dct`];
/// it is always `instant`, always first in the entity list, and never
/// user-deletable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Entity {
    pub id: String,
    pub text: String,
    pub start: usize,
    pub end: usize,
    #[serde(rename = "type", default)]
    pub kind: EntityKind,
    #[serde(rename = "isDCT", default, skip_serializing_if = "is_false")]
    pub is_dct: bool,
}

impl Entity {
    /// Entity covering `text[start..end]` with a fresh positional id.
    #[must_use]
    pub fn from_span(index: usize, span: &EntitySpan) -> Self {
        Self {
            id: format!("e{index}"),
            text: span.text.clone(),
            start: span.start,
            end: span.end,
            kind: span.kind,
            is_dct: false,
        }
    }
}

/// A bare span of text, as detected by the backend's entity annotator and
/// as written to exported documents. Unlike [`Entity`] it carries no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: EntityKind,
}

impl From<&Entity> for EntitySpan {
    fn from(entity: &Entity) -> Self {
        Self {
            start: entity.start,
            end: entity.end,
            text: entity.text.clone(),
            kind: entity.kind,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kind_defaults_to_interval() {
        let entity: Entity =
            serde_json::from_str(r#"{"id":"e0","text":"said","start":20,"end":24}"#).unwrap();
        assert_eq!(entity.kind, EntityKind::Interval);
        assert!(!entity.is_dct);
    }

    #[test]
    fn kind_uses_wire_name_type() {
        let entity = Entity {
            id: "e1".into(),
            text: "noon".into(),
            start: 4,
            end: 8,
            kind: EntityKind::Instant,
            is_dct: false,
        };
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json["type"], "instant");
        assert!(json.get("isDCT").is_none(), "false isDCT is omitted");
    }

    #[test]
    fn dct_flag_roundtrips() {
        let entity = Entity {
            id: "dct".into(),
            text: "10/30/89".into(),
            start: 24,
            end: 32,
            kind: EntityKind::Instant,
            is_dct: true,
        };
        let json = serde_json::to_string(&entity).unwrap();
        assert!(json.contains("\"isDCT\":true"));
        let back: Entity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entity);
    }

    #[test]
    fn span_from_entity_drops_the_id() {
        let entity = Entity {
            id: "e3".into(),
            text: "buy".into(),
            start: 10,
            end: 13,
            kind: EntityKind::Interval,
            is_dct: false,
        };
        let span = EntitySpan::from(&entity);
        assert_eq!(span.text, "buy");
        assert_eq!((span.start, span.end), (10, 13));
    }
}
