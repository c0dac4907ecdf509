//! The server-authoritative annotation session controller.
//!
//! The controller owns a read/render copy of the board and replaces it
//! wholesale after every mutating request — one user edit can imply many
//! other cells via closure, so partial merges would drift from the
//! server-computed state. Mutating calls take `&mut self`, which rules out
//! two in-flight step/undo requests for the same session at compile time;
//! a shared controller must be serialized externally, mirroring the
//! disabled-while-loading gate a UI puts on its move controls.

use tempo_board::board::Board;
use tempo_core::entity::Entity;
use tempo_core::relation::Relation;

use crate::wire::{
    AnnotationResultsResponse, AnnotationStepResponse, RecordedRelation, StepAction,
};
use crate::{ClientError, TempoClient};

/// A live annotation session.
///
/// On a rejected step or undo the controller's state is left at its last
/// known-good value; only a successful response replaces it.
pub struct AnnotationSession<'a> {
    client: &'a TempoClient,
    session_id: String,
    text: String,
    board: Board,
    has_incoherence: bool,
    n_annotated: usize,
    n_relations: usize,
    relations: Vec<RecordedRelation>,
}

impl<'a> AnnotationSession<'a> {
    /// Create a session for a (DCT-normalized) document.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::TooFewEntities`] for fewer than two
    /// entities, [`ClientError::Rejected`] when the backend refuses the
    /// payload, and [`ClientError::Board`] when the returned board fails
    /// shape validation.
    pub async fn create(
        client: &'a TempoClient,
        text: &str,
        entities: &[Entity],
        dct: Option<&str>,
    ) -> Result<AnnotationSession<'a>, ClientError> {
        let resp = client.new_annotation_session(text, entities, dct).await?;
        let board = Board::from_wire(&resp.board, resp.endpoints)?;
        Ok(Self {
            client,
            session_id: resp.session_id,
            text: resp.text,
            board,
            has_incoherence: resp.has_incoherence,
            n_annotated: resp.n_annotated,
            n_relations: resp.n_relations,
            relations: Vec::new(),
        })
    }

    /// Assert a relation at `(row, col)` and merge the closure-updated
    /// board the server returns.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] with the server's message
    /// verbatim for masked or out-of-range coordinates; local state is
    /// unchanged on failure.
    pub async fn step(
        &mut self,
        row: usize,
        col: usize,
        relation: Relation,
    ) -> Result<(), ClientError> {
        let action = StepAction::new(row, col, relation);
        let resp = self.client.annotation_step(&self.session_id, action).await?;
        self.merge(resp)?;
        self.relations.push(RecordedRelation {
            position: (row, col),
            relation,
            timestamp: self.relations.len(),
        });
        Ok(())
    }

    /// Undo the most recent step.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NoHistory`] when no step has been accepted
    /// yet; the check is local, so no doomed request is issued.
    pub async fn undo(&mut self) -> Result<(), ClientError> {
        if self.relations.is_empty() {
            return Err(ClientError::NoHistory);
        }
        let resp = self.client.annotation_undo(&self.session_id).await?;
        self.merge(resp)?;
        self.relations.pop();
        Ok(())
    }

    /// Fetch the session's results. Read-only; local state is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] for an unknown session id.
    pub async fn results(&self) -> Result<AnnotationResultsResponse, ClientError> {
        self.client.annotation_results(&self.session_id).await
    }

    fn merge(&mut self, resp: AnnotationStepResponse) -> Result<(), ClientError> {
        // Validate the full response before touching any state, so a bad
        // payload leaves the last known-good board in place.
        let board = Board::from_wire(&resp.board, resp.endpoints)?;
        self.board = board;
        self.has_incoherence = resp.has_incoherence;
        self.n_annotated = resp.n_annotated;
        if let Some(n_relations) = resp.n_relations {
            self.n_relations = n_relations;
        }
        Ok(())
    }

    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn has_incoherence(&self) -> bool {
        self.has_incoherence
    }

    /// Number of annotatable pairs the server accounted as annotated.
    #[must_use]
    pub fn n_annotated(&self) -> usize {
        self.n_annotated
    }

    /// Total number of annotatable pairs on the board.
    #[must_use]
    pub fn n_relations(&self) -> usize {
        self.n_relations
    }

    /// Locally recorded accepted steps, oldest first.
    #[must_use]
    pub fn relations(&self) -> &[RecordedRelation] {
        &self.relations
    }
}
