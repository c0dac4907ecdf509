//! Entity detection endpoint.

use tempo_core::entity::EntitySpan;

use crate::wire::{AnnotateEntitiesRequest, AnnotateEntitiesResponse};
use crate::{ClientError, TempoClient};

impl TempoClient {
    /// Ask the backend's entity model for the temporal spans in `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] when the backend refuses the
    /// text and [`ClientError::Http`] on transport failure.
    pub async fn annotate_entities(&self, text: &str) -> Result<Vec<EntitySpan>, ClientError> {
        let resp: AnnotateEntitiesResponse = self
            .post("/api/annotate_entities", &AnnotateEntitiesRequest { text })
            .await?;
        Ok(resp.entities)
    }
}

#[cfg(test)]
mod tests {
    use crate::wire::AnnotateEntitiesResponse;
    use pretty_assertions::assert_eq;
    use tempo_core::entity::EntityKind;

    const FIXTURE: &str = r#"{
        "entities": [
            {"start": 5, "end": 9, "text": "said", "type": "interval"},
            {"start": 20, "end": 24, "text": "noon", "type": "instant"}
        ]
    }"#;

    #[test]
    fn parse_detected_spans() {
        let resp: AnnotateEntitiesResponse = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(resp.entities.len(), 2);
        assert_eq!(resp.entities[0].text, "said");
        assert_eq!(resp.entities[0].kind, EntityKind::Interval);
        assert_eq!(resp.entities[1].kind, EntityKind::Instant);
    }
}
