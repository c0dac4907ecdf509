//! Serde roundtrip and JsonSchema validation tests for the wire-facing
//! core types.

use chrono::Utc;
use schemars::schema_for;
use tempo_core::entity::{Entity, EntityKind, EntitySpan};
use tempo_core::export::ExportDocument;
use tempo_core::relation::Relation;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    entity_roundtrip,
    Entity,
    Entity {
        id: "e0".into(),
        text: "said".into(),
        start: 20,
        end: 24,
        kind: EntityKind::Interval,
        is_dct: false,
    }
);

roundtrip_and_validate!(
    dct_entity_roundtrip,
    Entity,
    Entity {
        id: "dct".into(),
        text: "10/30/89".into(),
        start: 24,
        end: 32,
        kind: EntityKind::Instant,
        is_dct: true,
    }
);

roundtrip_and_validate!(
    entity_span_roundtrip,
    EntitySpan,
    EntitySpan {
        start: 0,
        end: 4,
        text: "noon".into(),
        kind: EntityKind::Instant,
    }
);

roundtrip_and_validate!(relation_roundtrip, Relation, Relation::Before);

roundtrip_and_validate!(
    export_document_roundtrip,
    ExportDocument,
    ExportDocument {
        filename: Some("report.json".into()),
        text: "Hewlett-Packard Co. said it raised its stake.".into(),
        dct: Some("10/30/89".into()),
        entities: vec![EntitySpan {
            start: 20,
            end: 24,
            text: "said".into(),
            kind: EntityKind::Interval,
        }],
        annotated_at: Utc::now(),
        total_entities: 1,
    }
);
