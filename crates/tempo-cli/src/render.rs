//! Terminal rendering of relation boards.
//!
//! All-masked rows and columns are hidden rather than shown disabled;
//! within visible rows, unclassified cells print as `·` and masked cells
//! as blanks.

use tempo_board::board::Board;
use tempo_board::cell::Cell;

const CELL_WIDTH: usize = 4;

/// Render the visible part of a board as an aligned grid, rows labelled
/// with their endpoint strings and columns with their indices.
#[must_use]
pub fn render_board(board: &Board) -> String {
    let rows = board.visible_rows();
    let cols = board.visible_cols();
    if rows.is_empty() || cols.is_empty() {
        return "(no annotatable cells)\n".to_string();
    }

    let label_width = rows
        .iter()
        .map(|&row| board.endpoints()[row].len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();

    // Header: column indices over an index-and-label gutter.
    out.push_str(&" ".repeat(4 + label_width));
    for &col in &cols {
        out.push_str(&format!("{col:>CELL_WIDTH$}"));
    }
    out.push('\n');

    for &row in &rows {
        out.push_str(&format!("{row:>2}  {:<label_width$}", board.endpoints()[row]));
        for &col in &cols {
            let symbol = match board.get(row, col) {
                Some(Cell::Classified(relation)) => relation.symbol(),
                Some(Cell::Unclassified) => "·",
                _ => "",
            };
            out.push_str(&format!("{symbol:>CELL_WIDTH$}"));
        }
        out.push('\n');
    }

    out
}
