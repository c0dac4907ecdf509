//! Cell values and their wire encoding.

use tempo_core::relation::Relation;

use crate::BoardError;

/// Wire sentinel for a cell with no asserted or inferred relation.
pub const UNCLASSIFIED: i64 = -1;

/// Wire sentinel for a cell that is structurally not annotatable.
pub const MASKED: i64 = -2;

/// One position of a relation board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Unclassified,
    Masked,
    Classified(Relation),
}

impl Cell {
    /// Decode a wire integer.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownCellValue`] for integers outside the
    /// encoding; `row`/`col` are only used to report the position.
    pub fn from_raw(raw: i64, row: usize, col: usize) -> Result<Self, BoardError> {
        match raw {
            UNCLASSIFIED => Ok(Self::Unclassified),
            MASKED => Ok(Self::Masked),
            _ => Relation::from_id(raw).map(Self::Classified).ok_or(
                BoardError::UnknownCellValue {
                    row,
                    col,
                    value: raw,
                },
            ),
        }
    }

    #[must_use]
    pub const fn to_raw(self) -> i64 {
        match self {
            Self::Unclassified => UNCLASSIFIED,
            Self::Masked => MASKED,
            Self::Classified(relation) => relation.id() as i64,
        }
    }

    #[must_use]
    pub const fn is_masked(self) -> bool {
        matches!(self, Self::Masked)
    }

    #[must_use]
    pub const fn relation(self) -> Option<Relation> {
        match self {
            Self::Classified(relation) => Some(relation),
            _ => None,
        }
    }

    /// Display symbol: the relation's symbol for classified cells, empty
    /// for everything else.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Classified(relation) => relation.symbol(),
            _ => "",
        }
    }
}
