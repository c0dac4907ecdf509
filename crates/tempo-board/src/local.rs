//! The legacy, fully client-side board.
//!
//! Unlike [`crate::board::Board`], the client owns the cell domain here:
//! endpoints are derived two-per-entity in entity-list order, and the
//! annotatable cells are the ordered pairs `(row, col)` with `row < col`
//! whose endpoints belong to different entities. Everything outside that
//! domain is masked. Asserted cells are serialized into timeline triples
//! for the backend's closure endpoint; the closure comes back through
//! [`crate::closure::apply_closure`].

use std::collections::HashMap;

use tempo_core::endpoint::derive_endpoints;
use tempo_core::entity::Entity;
use tempo_core::relation::Relation;

use crate::BoardError;
use crate::board::Board;
use crate::cell::{MASKED, UNCLASSIFIED};
use crate::closure::TimelineRelation;
use crate::index::EndpointIndex;

/// Client-owned relation board over derived endpoints.
#[derive(Debug, Clone)]
pub struct LocalBoard {
    endpoints: Vec<String>,
    index: EndpointIndex,
    /// Owning entity id per endpoint index, for the same-entity mask rule.
    entity_of: Vec<String>,
    cells: HashMap<(usize, usize), Relation>,
}

impl LocalBoard {
    /// Build an empty board for an entity list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateEndpoint`] when two entities share an
    /// id.
    pub fn new(entities: &[Entity]) -> Result<Self, BoardError> {
        let endpoints = derive_endpoints(entities);
        let index = EndpointIndex::new(&endpoints)?;
        let entity_of = entities
            .iter()
            .flat_map(|entity| [entity.id.clone(), entity.id.clone()])
            .collect();
        Ok(Self {
            endpoints,
            index,
            entity_of,
            cells: HashMap::new(),
        })
    }

    /// Number of endpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    #[must_use]
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    #[must_use]
    pub fn endpoint_index(&self) -> &EndpointIndex {
        &self.index
    }

    /// Whether `(row, col)` is an annotatable cell: in range, `row < col`,
    /// endpoints of different entities.
    #[must_use]
    pub fn in_domain(&self, row: usize, col: usize) -> bool {
        row < col && col < self.endpoints.len() && self.entity_of[row] != self.entity_of[col]
    }

    /// Assert (or overwrite) a relation at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] outside the board and
    /// [`BoardError::Masked`] for in-range cells outside the domain.
    pub fn set(&mut self, row: usize, col: usize, relation: Relation) -> Result<(), BoardError> {
        self.check_cell(row, col)?;
        self.cells.insert((row, col), relation);
        Ok(())
    }

    /// Clear an asserted cell (double-click on the legacy grid).
    ///
    /// # Errors
    ///
    /// Same domain errors as [`LocalBoard::set`].
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        self.check_cell(row, col)?;
        self.cells.remove(&(row, col));
        Ok(())
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Relation> {
        self.cells.get(&(row, col)).copied()
    }

    /// Serialize every classified cell into a timeline triple, in row-major
    /// order, using endpoint display strings.
    #[must_use]
    pub fn timeline(&self) -> Vec<TimelineRelation> {
        let mut triples: Vec<(&(usize, usize), &Relation)> = self.cells.iter().collect();
        triples.sort_by_key(|&(&position, _)| position);
        triples
            .into_iter()
            .map(|(&(row, col), &relation)| TimelineRelation {
                source: self.endpoints[row].clone(),
                target: self.endpoints[col].clone(),
                relation,
            })
            .collect()
    }

    /// Snapshot as a wire-shaped [`Board`]: masked outside the domain,
    /// unclassified or classified inside.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        let n = self.endpoints.len();
        let matrix: Vec<Vec<i64>> = (0..n)
            .map(|row| {
                (0..n)
                    .map(|col| {
                        if !self.in_domain(row, col) {
                            MASKED
                        } else {
                            self.get(row, col)
                                .map_or(UNCLASSIFIED, |relation| i64::from(relation.id()))
                        }
                    })
                    .collect()
            })
            .collect();
        Board::from_wire(&matrix, self.endpoints.clone())
            .expect("snapshot matrix is square by construction")
    }

    fn check_cell(&self, row: usize, col: usize) -> Result<(), BoardError> {
        let size = self.endpoints.len();
        if row >= size || col >= size {
            return Err(BoardError::OutOfRange { row, col, size });
        }
        if !self.in_domain(row, col) {
            return Err(BoardError::Masked { row, col });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempo_core::entity::EntityKind;

    fn entities(k: usize) -> Vec<Entity> {
        (0..k)
            .map(|i| Entity {
                id: format!("e{i}"),
                text: format!("t{i}"),
                start: i * 2,
                end: i * 2 + 1,
                kind: EntityKind::Interval,
                is_dct: false,
            })
            .collect()
    }

    #[test]
    fn domain_excludes_same_entity_and_lower_triangle() {
        let board = LocalBoard::new(&entities(2)).unwrap();
        assert_eq!(board.len(), 4);

        // start e0 / end e0 belong to the same entity.
        assert!(!board.in_domain(0, 1));
        // Lower triangle and diagonal are out.
        assert!(!board.in_domain(2, 0));
        assert!(!board.in_domain(1, 1));
        // Cross-entity upper-triangle pairs are in.
        assert!(board.in_domain(0, 2));
        assert!(board.in_domain(1, 3));
    }

    #[test]
    fn set_outside_domain_is_masked() {
        let mut board = LocalBoard::new(&entities(2)).unwrap();
        assert!(matches!(
            board.set(0, 1, Relation::Before),
            Err(BoardError::Masked { row: 0, col: 1 })
        ));
        assert!(matches!(
            board.set(0, 9, Relation::Before),
            Err(BoardError::OutOfRange { .. })
        ));
    }

    #[test]
    fn timeline_lists_classified_cells_in_row_major_order() {
        let mut board = LocalBoard::new(&entities(2)).unwrap();
        board.set(1, 3, Relation::Equal).unwrap();
        board.set(0, 2, Relation::Before).unwrap();

        let timeline = board.timeline();
        assert_eq!(
            timeline,
            vec![
                TimelineRelation {
                    source: "start e0".into(),
                    target: "start e1".into(),
                    relation: Relation::Before,
                },
                TimelineRelation {
                    source: "end e0".into(),
                    target: "end e1".into(),
                    relation: Relation::Equal,
                },
            ]
        );
    }

    #[test]
    fn clear_removes_an_assertion() {
        let mut board = LocalBoard::new(&entities(2)).unwrap();
        board.set(0, 2, Relation::After).unwrap();
        board.clear(0, 2).unwrap();
        assert_eq!(board.get(0, 2), None);
        assert!(board.timeline().is_empty());
    }

    #[test]
    fn snapshot_matches_the_wire_encoding() {
        let mut board = LocalBoard::new(&entities(2)).unwrap();
        board.set(0, 2, Relation::Before).unwrap();

        let snapshot = board.snapshot();
        assert_eq!(snapshot.size(), 4);
        assert_eq!(
            snapshot.get(0, 2).unwrap(),
            crate::cell::Cell::Classified(Relation::Before)
        );
        assert!(snapshot.get(0, 1).unwrap().is_masked());
        assert_eq!(snapshot.get(1, 3).unwrap(), crate::cell::Cell::Unclassified);
    }
}
