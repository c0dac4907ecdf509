//! Re-projection of closure timelines onto the local board.
//!
//! The backend's closure endpoint takes the asserted triples and returns a
//! possibly larger set — everything logically implied. Returned triples are
//! directed `(source, target)` pairs, but the local board only admits one
//! ordering of each pair, so a triple may arrive "backwards": its exact
//! `(row, col)` projection falls outside the allowed domain while the
//! swapped pair is a valid cell. In that case the relation is inverted
//! (After↔Before, Equal and Unknown fixed) and written at the swapped
//! position. Triples that map in neither orientation are dropped and
//! counted, never an error for the whole application.

use serde::{Deserialize, Serialize};
use tempo_core::relation::Relation;

use crate::local::LocalBoard;

/// One directed relation between two endpoints, in wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineRelation {
    pub source: String,
    pub target: String,
    pub relation: Relation,
}

impl TimelineRelation {
    /// The same relation read in the opposite direction.
    #[must_use]
    pub fn inverted(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
            relation: self.relation.invert(),
        }
    }
}

/// Result of applying a closure timeline to a board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClosureOutcome {
    /// Cells written, in either orientation.
    pub written: usize,
    /// Triples that mapped onto no valid cell. A non-empty list is an
    /// anomaly worth surfacing, not a silent success.
    pub dropped: Vec<TimelineRelation>,
}

/// Write a closure timeline onto the board.
///
/// For each triple the exact `(row, col)` projection is tried first; if
/// that cell is not in the board's domain, the swapped pair with the
/// inverted relation is tried; if neither maps, the triple is dropped.
pub fn apply_closure(board: &mut LocalBoard, timeline: &[TimelineRelation]) -> ClosureOutcome {
    let mut outcome = ClosureOutcome::default();

    for triple in timeline {
        let source = board.endpoint_index().position(&triple.source);
        let target = board.endpoint_index().position(&triple.target);

        let position = match (source, target) {
            (Some(row), Some(col)) if board.in_domain(row, col) => {
                Some((row, col, triple.relation))
            }
            (Some(col), Some(row)) if board.in_domain(row, col) => {
                Some((row, col, triple.relation.invert()))
            }
            _ => None,
        };

        match position {
            Some((row, col, relation)) => {
                board
                    .set(row, col, relation)
                    .expect("domain-checked cell accepts writes");
                outcome.written += 1;
            }
            None => {
                tracing::warn!(
                    source = %triple.source,
                    target = %triple.target,
                    relation = %triple.relation,
                    "closure triple does not map onto the board; dropping"
                );
                outcome.dropped.push(triple.clone());
            }
        }
    }

    outcome
}
