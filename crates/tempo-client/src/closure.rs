//! Temporal-closure endpoint for the legacy client-side board.
//!
//! The server-authoritative session computes closure on every step; only
//! the legacy [`LocalBoard`] needs to request it explicitly. The board's
//! asserted cells go out as timeline triples, the (possibly larger)
//! closure comes back, and [`apply_closure`] re-projects it onto the
//! board with the swap-and-invert fallback.

use tempo_board::closure::{ClosureOutcome, TimelineRelation, apply_closure};
use tempo_board::local::LocalBoard;

use crate::wire::TimelinePayload;
use crate::{ClientError, TempoClient};

impl TempoClient {
    /// Compute the temporal closure of a set of asserted relations.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] when the backend refuses the
    /// timeline and [`ClientError::Http`] on transport failure.
    pub async fn temporal_closure(
        &self,
        timeline: &[TimelineRelation],
    ) -> Result<Vec<TimelineRelation>, ClientError> {
        let payload = TimelinePayload {
            timeline: timeline.to_vec(),
        };
        let resp: TimelinePayload = self.post("/api/temporal_closure", &payload).await?;
        Ok(resp.timeline)
    }

    /// Close a local board in place: post its asserted cells, re-project
    /// the returned closure. The outcome reports cells written and any
    /// triples that mapped onto no valid cell.
    ///
    /// # Errors
    ///
    /// The board is untouched when the request itself fails.
    pub async fn close_local_board(
        &self,
        board: &mut LocalBoard,
    ) -> Result<ClosureOutcome, ClientError> {
        let closed = self.temporal_closure(&board.timeline()).await?;
        Ok(apply_closure(board, &closed))
    }
}
