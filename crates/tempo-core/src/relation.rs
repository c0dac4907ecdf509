//! Pairwise temporal relations between entity endpoints.
//!
//! The wire protocol uses two encodings for the same four relations:
//! integer ids (`0..=3`) inside board matrices, and display symbols
//! (`>`, `<`, `=`, `-`) inside timeline triples and step actions. Serde
//! serializes a [`Relation`] as its symbol; board cells convert through
//! [`Relation::from_id`] in `tempo-board`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Temporal relation between two endpoints, read left to right:
/// `row After col` means the row endpoint happens after the column endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Relation {
    #[serde(rename = ">")]
    After,
    #[serde(rename = "<")]
    Before,
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = "-")]
    Unknown,
}

impl Relation {
    /// Integer id used inside board matrices.
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::After => 0,
            Self::Before => 1,
            Self::Equal => 2,
            Self::Unknown => 3,
        }
    }

    /// Decode a board-matrix integer. Returns `None` for anything outside
    /// `0..=3` (including the unclassified/masked sentinels).
    #[must_use]
    pub const fn from_id(id: i64) -> Option<Self> {
        match id {
            0 => Some(Self::After),
            1 => Some(Self::Before),
            2 => Some(Self::Equal),
            3 => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Display symbol used in timeline triples and step actions.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::After => ">",
            Self::Before => "<",
            Self::Equal => "=",
            Self::Unknown => "-",
        }
    }

    /// Decode a display symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ">" => Some(Self::After),
            "<" => Some(Self::Before),
            "=" => Some(Self::Equal),
            "-" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Human-readable name, as shown in relation pickers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::After => "After",
            Self::Before => "Before",
            Self::Equal => "Equal",
            Self::Unknown => "Unknown",
        }
    }

    /// The relation seen from the opposite direction: cell `(i, j)` and
    /// cell `(j, i)` hold each other's inverse.
    #[must_use]
    pub const fn invert(self) -> Self {
        match self {
            Self::After => Self::Before,
            Self::Before => Self::After,
            Self::Equal => Self::Equal,
            Self::Unknown => Self::Unknown,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Relation::After, 0, ">")]
    #[case(Relation::Before, 1, "<")]
    #[case(Relation::Equal, 2, "=")]
    #[case(Relation::Unknown, 3, "-")]
    fn encodings_agree(#[case] relation: Relation, #[case] id: i64, #[case] symbol: &str) {
        assert_eq!(i64::from(relation.id()), id);
        assert_eq!(relation.symbol(), symbol);
        assert_eq!(Relation::from_id(id), Some(relation));
        assert_eq!(Relation::from_symbol(symbol), Some(relation));
    }

    #[rstest]
    #[case(Relation::After, Relation::Before)]
    #[case(Relation::Before, Relation::After)]
    #[case(Relation::Equal, Relation::Equal)]
    #[case(Relation::Unknown, Relation::Unknown)]
    fn invert_maps_to_expected(#[case] relation: Relation, #[case] inverted: Relation) {
        assert_eq!(relation.invert(), inverted);
    }

    #[rstest]
    #[case(Relation::After)]
    #[case(Relation::Before)]
    #[case(Relation::Equal)]
    #[case(Relation::Unknown)]
    fn invert_is_an_involution(#[case] relation: Relation) {
        assert_eq!(relation.invert().invert(), relation);
    }

    #[test]
    fn sentinels_are_not_relations() {
        assert_eq!(Relation::from_id(-1), None);
        assert_eq!(Relation::from_id(-2), None);
        assert_eq!(Relation::from_id(4), None);
    }

    #[test]
    fn serializes_as_symbol() {
        assert_eq!(serde_json::to_string(&Relation::Before).unwrap(), "\"<\"");
        let back: Relation = serde_json::from_str("\">\"").unwrap();
        assert_eq!(back, Relation::After);
    }
}
