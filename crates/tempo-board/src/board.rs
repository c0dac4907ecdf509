//! The server-authoritative relation board.

use tempo_core::relation::Relation;

use crate::BoardError;
use crate::cell::Cell;

/// A square relation matrix plus the endpoint display strings labelling its
/// rows and columns.
///
/// The server owns this data: the client builds a `Board` from each
/// response and replaces its copy wholesale after every mutating request.
/// One user edit can imply many other cells via closure, so partial
/// client-side writes would drift from the coherent server state — there is
/// deliberately no `set_cell` here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    endpoints: Vec<String>,
    size: usize,
}

/// A disagreement between an annotated board and a reference board at one
/// cell, for post-game comparison views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub row: usize,
    pub col: usize,
    pub annotated: Relation,
    pub reference: Relation,
}

impl Board {
    /// Build a board from the wire representation, validating shape.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EndpointCountMismatch`] if the endpoints array
    /// and matrix disagree on the size (the client must never assume
    /// positional alignment in that case), [`BoardError::NotSquare`] for a
    /// ragged matrix, and [`BoardError::UnknownCellValue`] for integers
    /// outside the cell encoding.
    pub fn from_wire(matrix: &[Vec<i64>], endpoints: Vec<String>) -> Result<Self, BoardError> {
        let size = endpoints.len();
        if matrix.len() != size {
            return Err(BoardError::EndpointCountMismatch {
                endpoints: size,
                rows: matrix.len(),
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in matrix.iter().enumerate() {
            if values.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            for (col, &raw) in values.iter().enumerate() {
                cells.push(Cell::from_raw(raw, row, col)?);
            }
        }

        Ok(Self {
            cells,
            endpoints,
            size,
        })
    }

    /// Number of endpoints (= rows = columns).
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[must_use]
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Cell lookup with a typed out-of-range error.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] when the coordinate lies outside
    /// the board.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.get(row, col).ok_or(BoardError::OutOfRange {
            row,
            col,
            size: self.size,
        })
    }

    /// A row is visible iff at least one of its cells is not masked.
    /// All-masked rows are hidden rather than rendered disabled.
    #[must_use]
    pub fn row_visible(&self, row: usize) -> bool {
        (0..self.size).any(|col| self.get(row, col).is_some_and(|cell| !cell.is_masked()))
    }

    /// Column counterpart of [`Board::row_visible`].
    #[must_use]
    pub fn col_visible(&self, col: usize) -> bool {
        (0..self.size).any(|row| self.get(row, col).is_some_and(|cell| !cell.is_masked()))
    }

    #[must_use]
    pub fn visible_rows(&self) -> Vec<usize> {
        (0..self.size).filter(|&row| self.row_visible(row)).collect()
    }

    #[must_use]
    pub fn visible_cols(&self) -> Vec<usize> {
        (0..self.size).filter(|&col| self.col_visible(col)).collect()
    }

    /// True once every non-masked cell carries a relation.
    #[must_use]
    pub fn fully_classified(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| !matches!(cell, Cell::Unclassified))
    }

    /// Compare against an independently supplied reference board and
    /// report the cells where both are classified but disagree.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SizeMismatch`] when the boards differ in size.
    pub fn mismatches(&self, reference: &Self) -> Result<Vec<Mismatch>, BoardError> {
        if self.size != reference.size {
            return Err(BoardError::SizeMismatch {
                left: self.size,
                right: reference.size,
            });
        }

        let mut mismatches = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let (Some(annotated), Some(truth)) = (
                    self.get(row, col).and_then(Cell::relation),
                    reference.get(row, col).and_then(Cell::relation),
                ) else {
                    continue;
                };
                if annotated != truth {
                    mismatches.push(Mismatch {
                        row,
                        col,
                        annotated,
                        reference: truth,
                    });
                }
            }
        }
        Ok(mismatches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn endpoints(n: usize) -> Vec<String> {
        (0..n)
            .map(|i| {
                let kind = if i % 2 == 0 { "start" } else { "end" };
                format!("{kind} e{}", i / 2)
            })
            .collect()
    }

    #[test]
    fn one_entity_board_has_one_visible_pair() {
        // N=2: the single off-diagonal pair is open, the diagonal masked.
        let matrix = vec![vec![-2, -1], vec![-2, -2]];
        let board = Board::from_wire(&matrix, endpoints(2)).unwrap();

        assert_eq!(board.size(), 2);
        assert_eq!(board.get(0, 1), Some(Cell::Unclassified));
        assert!(board.row_visible(0));
        assert!(board.col_visible(1));
        assert!(!board.row_visible(1));
        assert!(!board.col_visible(0));
        assert_eq!(board.visible_rows(), vec![0]);
        assert_eq!(board.visible_cols(), vec![1]);
    }

    #[test]
    fn all_rows_visible_when_only_self_pairs_are_masked() {
        // N=4 with every cell open except the diagonal.
        let matrix: Vec<Vec<i64>> = (0..4)
            .map(|row| (0..4).map(|col| if row == col { -2 } else { -1 }).collect())
            .collect();
        let board = Board::from_wire(&matrix, endpoints(4)).unwrap();

        for i in 0..4 {
            assert!(board.row_visible(i));
            assert!(board.col_visible(i));
        }
        assert_eq!(board.visible_rows(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn endpoint_count_mismatch_is_a_protocol_error() {
        let matrix = vec![vec![-1, -1], vec![-1, -1]];
        let err = Board::from_wire(&matrix, endpoints(4)).unwrap_err();
        assert!(matches!(
            err,
            BoardError::EndpointCountMismatch {
                endpoints: 4,
                rows: 2
            }
        ));
    }

    #[test]
    fn ragged_matrix_is_rejected() {
        let matrix = vec![vec![-1, -1], vec![-1]];
        let err = Board::from_wire(&matrix, endpoints(2)).unwrap_err();
        assert!(matches!(err, BoardError::NotSquare { row: 1, len: 1, .. }));
    }

    #[test]
    fn cell_lookup_reports_out_of_range() {
        let board = Board::from_wire(&[vec![-2]], endpoints(1)).unwrap();
        assert!(matches!(
            board.cell(0, 1),
            Err(BoardError::OutOfRange { size: 1, .. })
        ));
    }

    #[test]
    fn fully_classified_ignores_masked_cells() {
        let done = vec![vec![-2, 1], vec![-2, -2]];
        let board = Board::from_wire(&done, endpoints(2)).unwrap();
        assert!(board.fully_classified());

        let open = vec![vec![-2, -1], vec![-2, -2]];
        let board = Board::from_wire(&open, endpoints(2)).unwrap();
        assert!(!board.fully_classified());
    }

    #[test]
    fn mismatches_reports_disagreeing_classified_cells_only() {
        let annotated = vec![vec![-2, 1, 0], vec![-2, -2, -1], vec![-2, -2, -2]];
        let reference = vec![vec![-2, 2, 0], vec![-2, -2, 3], vec![-2, -2, -2]];
        let left = Board::from_wire(&annotated, endpoints(3)).unwrap();
        let right = Board::from_wire(&reference, endpoints(3)).unwrap();

        let mismatches = left.mismatches(&right).unwrap();
        // (0,1) disagrees; (0,2) agrees; (1,2) is unclassified on the left.
        assert_eq!(mismatches.len(), 1);
        assert_eq!(
            mismatches[0],
            Mismatch {
                row: 0,
                col: 1,
                annotated: Relation::Before,
                reference: Relation::Equal,
            }
        );
    }

    #[test]
    fn mismatches_requires_equal_sizes() {
        let small = Board::from_wire(&[vec![-2]], endpoints(1)).unwrap();
        let big = Board::from_wire(&[vec![-2, -1], vec![-2, -2]], endpoints(2)).unwrap();
        assert!(matches!(
            small.mismatches(&big),
            Err(BoardError::SizeMismatch { left: 1, right: 2 })
        ));
    }
}
