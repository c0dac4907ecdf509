//! Board error types.

use thiserror::Error;

/// Errors raised by board construction and access.
///
/// Shape errors (`EndpointCountMismatch`, `NotSquare`, `UnknownCellValue`)
/// mean the wire payload cannot be trusted; callers must not fall back to
/// positional guessing. Access errors (`OutOfRange`, `Masked`) are per-cell
/// and must not take down rendering.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The endpoints array and the matrix disagree on the board size.
    #[error("endpoint count {endpoints} does not match matrix rows {rows}")]
    EndpointCountMismatch { endpoints: usize, rows: usize },

    /// A matrix row has the wrong number of cells.
    #[error("matrix row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A cell holds an integer outside the known encoding.
    #[error("unknown cell value {value} at ({row}, {col})")]
    UnknownCellValue { row: usize, col: usize, value: i64 },

    /// A coordinate lies outside the board.
    #[error("cell ({row}, {col}) is out of range for a board of size {size}")]
    OutOfRange { row: usize, col: usize, size: usize },

    /// The cell is structurally not annotatable.
    #[error("cell ({row}, {col}) is masked")]
    Masked { row: usize, col: usize },

    /// Two endpoints share the same display string.
    #[error("duplicate endpoint '{0}'")]
    DuplicateEndpoint(String),

    /// Two boards of different sizes were compared.
    #[error("board size {left} does not match board size {right}")]
    SizeMismatch { left: usize, right: usize },
}
