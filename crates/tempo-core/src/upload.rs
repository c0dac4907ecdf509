//! Upload validation for annotation documents.
//!
//! Two file shapes are accepted: JSON documents (`text` required, optional
//! `dct` string and `entities` array) and plain text files (non-empty,
//! entities start out empty). Validation is per-file and non-fatal: a batch
//! reports each file's errors and the valid ones proceed.
//!
//! Entity checks run against the raw JSON values rather than a typed
//! deserialization so that each problem produces its own message instead of
//! one opaque parse failure.

use serde_json::Value;

use crate::entity::{Entity, EntityKind};

/// A validated document, ready for DCT normalization and session creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub text: String,
    pub dct: Option<String>,
    pub entities: Vec<Entity>,
}

/// Outcome of validating one uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub errors: Vec<String>,
    pub document: Option<Document>,
}

impl Validation {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn invalid(errors: Vec<String>) -> Self {
        Self {
            errors,
            document: None,
        }
    }
}

/// Validate a file by extension: `.json` documents, `.txt`/`.text` plain
/// text, anything else unsupported.
#[must_use]
pub fn validate_upload(file_name: &str, content: &str) -> Validation {
    let lower = file_name.to_lowercase();
    if lower.ends_with(".json") {
        validate_json(content)
    } else if lower.ends_with(".txt") || lower.ends_with(".text") {
        validate_text(content)
    } else {
        Validation::invalid(vec![
            "Unsupported file type. Please upload .json or .txt files".to_string(),
        ])
    }
}

/// Validate a JSON document upload.
#[must_use]
pub fn validate_json(content: &str) -> Validation {
    let value: Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(e) => return Validation::invalid(vec![format!("Invalid JSON format: {e}")]),
    };

    let mut errors = Vec::new();

    let text = value.get("text").and_then(Value::as_str);
    if text.is_none() {
        errors.push("Missing or invalid \"text\" field (required)".to_string());
    }

    let dct = value.get("dct");
    if let Some(dct) = dct
        && !dct.is_null()
        && !dct.is_string()
    {
        errors.push("Invalid \"dct\" field - must be a string".to_string());
    }

    let mut entities = Vec::new();
    if let Some(raw_entities) = value.get("entities")
        && !raw_entities.is_null()
    {
        match raw_entities.as_array() {
            None => errors.push("Invalid \"entities\" field - must be an array".to_string()),
            Some(array) => {
                for (idx, raw) in array.iter().enumerate() {
                    validate_entity(idx, raw, text, &mut errors, &mut entities);
                }
            }
        }
    }

    if !errors.is_empty() {
        return Validation::invalid(errors);
    }

    Validation {
        errors,
        document: Some(Document {
            text: text.unwrap_or_default().to_string(),
            dct: value
                .get("dct")
                .and_then(Value::as_str)
                .map(ToString::to_string),
            entities,
        }),
    }
}

/// Validate a plain text upload. The trimmed content becomes the document
/// text; entities start out empty.
#[must_use]
pub fn validate_text(content: &str) -> Validation {
    if content.trim().is_empty() {
        return Validation::invalid(vec!["Text file is empty".to_string()]);
    }
    Validation {
        errors: Vec::new(),
        document: Some(Document {
            text: content.trim().to_string(),
            dct: None,
            entities: Vec::new(),
        }),
    }
}

fn validate_entity(
    idx: usize,
    raw: &Value,
    text: Option<&str>,
    errors: &mut Vec<String>,
    entities: &mut Vec<Entity>,
) {
    let ordinal = idx + 1;
    let start = raw.get("start").and_then(Value::as_i64);
    let end = raw.get("end").and_then(Value::as_i64);

    let (Some(start), Some(end)) = (start, end) else {
        errors.push(format!(
            "Entity {ordinal}: \"start\" and \"end\" must be numbers"
        ));
        return;
    };

    let mut ok = true;
    if start >= end {
        errors.push(format!(
            "Entity {ordinal}: \"start\" must be less than \"end\""
        ));
        ok = false;
    }
    if let Some(text) = text
        && (start < 0 || end > text.len() as i64)
    {
        errors.push(format!("Entity {ordinal}: offsets out of text bounds"));
        ok = false;
    }

    let kind = match raw.get("type") {
        None | Some(Value::Null) => Some(EntityKind::Interval),
        Some(Value::String(s)) if s == "interval" => Some(EntityKind::Interval),
        Some(Value::String(s)) if s == "instant" => Some(EntityKind::Instant),
        Some(_) => {
            errors.push(format!(
                "Entity {ordinal}: type must be \"interval\" or \"instant\""
            ));
            None
        }
    };

    if !ok {
        return;
    }
    let (Some(kind), Some(text)) = (kind, text) else {
        return;
    };

    #[allow(clippy::cast_sign_loss)]
    let (start, end) = (start as usize, end as usize);
    let span_text = raw
        .get("text")
        .and_then(Value::as_str)
        .map_or_else(|| text[start..end].to_string(), ToString::to_string);
    entities.push(Entity {
        id: format!("e{idx}"),
        text: span_text,
        start,
        end,
        kind,
        is_dct: false,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn start_after_end_is_flagged() {
        let validation = validate_json(r#"{"text":"hello","entities":[{"start":2,"end":1}]}"#);
        assert!(!validation.is_valid());
        assert_eq!(
            validation.errors,
            vec!["Entity 1: \"start\" must be less than \"end\"".to_string()]
        );
        assert!(validation.document.is_none());
    }

    #[test]
    fn bogus_type_is_flagged() {
        let validation = validate_json(
            r#"{"text":"0123456789","entities":[{"start":0,"end":10,"type":"bogus"}]}"#,
        );
        assert!(!validation.is_valid());
        assert_eq!(
            validation.errors,
            vec!["Entity 1: type must be \"interval\" or \"instant\"".to_string()]
        );
    }

    #[test]
    fn missing_text_is_flagged() {
        let validation = validate_json(r#"{"entities":[]}"#);
        assert_eq!(
            validation.errors,
            vec!["Missing or invalid \"text\" field (required)".to_string()]
        );
    }

    #[test]
    fn non_numeric_offsets_are_flagged() {
        let validation =
            validate_json(r#"{"text":"hello","entities":[{"start":"0","end":4}]}"#);
        assert_eq!(
            validation.errors,
            vec!["Entity 1: \"start\" and \"end\" must be numbers".to_string()]
        );
    }

    #[test]
    fn out_of_bounds_offsets_are_flagged() {
        let validation = validate_json(r#"{"text":"hi","entities":[{"start":0,"end":10}]}"#);
        assert_eq!(
            validation.errors,
            vec!["Entity 1: offsets out of text bounds".to_string()]
        );
    }

    #[test]
    fn errors_accumulate_across_entities() {
        let validation = validate_json(
            r#"{"text":"hello","entities":[{"start":2,"end":1},{"start":0,"end":99}]}"#,
        );
        assert_eq!(validation.errors.len(), 2);
    }

    #[test]
    fn valid_document_fills_entity_text_from_offsets() {
        let validation =
            validate_json(r#"{"text":"They said so.","entities":[{"start":5,"end":9}]}"#);
        assert!(validation.is_valid());
        let document = validation.document.unwrap();
        assert_eq!(document.entities.len(), 1);
        assert_eq!(document.entities[0].text, "said");
        assert_eq!(document.entities[0].id, "e0");
        assert_eq!(document.entities[0].kind, EntityKind::Interval);
    }

    #[test]
    fn malformed_json_reports_the_parse_error() {
        let validation = validate_json("{not json");
        assert_eq!(validation.errors.len(), 1);
        assert!(validation.errors[0].starts_with("Invalid JSON format:"));
    }

    #[test]
    fn text_files_must_be_non_empty() {
        assert!(!validate_text("   \n").is_valid());
        let validation = validate_text("Some plain text.\n");
        assert!(validation.is_valid());
        assert_eq!(validation.document.unwrap().text, "Some plain text.");
    }

    #[test]
    fn extension_dispatch() {
        assert!(validate_upload("doc.JSON", r#"{"text":"x"}"#).is_valid());
        assert!(validate_upload("notes.txt", "x").is_valid());
        let validation = validate_upload("doc.pdf", "x");
        assert_eq!(
            validation.errors,
            vec!["Unsupported file type. Please upload .json or .txt files".to_string()]
        );
    }
}
