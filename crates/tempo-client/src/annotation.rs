//! Annotation-session endpoint calls.
//!
//! These are the raw request/response wrappers; the stateful controller
//! that owns board state lives in [`crate::session`].

use tempo_core::entity::Entity;

use crate::wire::{
    AnnotationResultsResponse, AnnotationStepRequest, AnnotationStepResponse,
    NewAnnotationSessionRequest, NewAnnotationSessionResponse, SessionRequest, StepAction,
};
use crate::{ClientError, TempoClient};

impl TempoClient {
    /// Open an annotation session for a document.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::TooFewEntities`] before any network traffic
    /// when fewer than two entities are supplied — the backend rejects
    /// such payloads unconditionally, so the call is never issued.
    pub async fn new_annotation_session(
        &self,
        text: &str,
        entities: &[Entity],
        dct: Option<&str>,
    ) -> Result<NewAnnotationSessionResponse, ClientError> {
        if entities.len() < 2 {
            return Err(ClientError::TooFewEntities {
                count: entities.len(),
            });
        }
        tracing::info!(entities = entities.len(), "creating annotation session");
        self.post(
            "/api/new_annotation_session",
            &NewAnnotationSessionRequest {
                text,
                entities,
                dct,
            },
        )
        .await
    }

    /// Assert one relation at a board position. The response carries the
    /// closure-updated board, which replaces the local copy wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] with the backend's message
    /// verbatim when the coordinate is masked or out of range.
    pub async fn annotation_step(
        &self,
        session_id: &str,
        action: StepAction,
    ) -> Result<AnnotationStepResponse, ClientError> {
        self.post(
            "/api/annotation_step",
            &AnnotationStepRequest { session_id, action },
        )
        .await
    }

    /// Undo the most recent step.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NoHistory`] when there is nothing to undo.
    pub async fn annotation_undo(
        &self,
        session_id: &str,
    ) -> Result<AnnotationStepResponse, ClientError> {
        self.post("/api/annotation_undo", &SessionRequest { session_id })
            .await
            .map_err(ClientError::into_undo)
    }

    /// Read-only export of a session's annotations; does not mutate
    /// session state.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] for an unknown session id.
    pub async fn annotation_results(
        &self,
        session_id: &str,
    ) -> Result<AnnotationResultsResponse, ClientError> {
        self.post("/api/get_annotation_results", &SessionRequest { session_id })
            .await
    }
}
