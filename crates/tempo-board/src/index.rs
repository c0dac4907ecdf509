//! Endpoint-to-matrix-index bijection.

use std::collections::HashMap;

use crate::BoardError;

/// Maps endpoint display strings (`"start e0"`) to matrix indices.
///
/// The bijection is fixed at board-construction time and must not change
/// for the lifetime of a session; re-deriving it after an entity-set change
/// invalidates all prior indices and requires a new board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointIndex {
    positions: HashMap<String, usize>,
}

impl EndpointIndex {
    /// Build the bijection from an ordered endpoint list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateEndpoint`] if two endpoints share a
    /// display string — positional indexing would be ambiguous.
    pub fn new(endpoints: &[String]) -> Result<Self, BoardError> {
        let mut positions = HashMap::with_capacity(endpoints.len());
        for (index, endpoint) in endpoints.iter().enumerate() {
            if positions.insert(endpoint.clone(), index).is_some() {
                return Err(BoardError::DuplicateEndpoint(endpoint.clone()));
            }
        }
        Ok(Self { positions })
    }

    /// Matrix index of an endpoint display string, if known.
    #[must_use]
    pub fn position(&self, endpoint: &str) -> Option<usize> {
        self.positions.get(endpoint).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_follow_list_order() {
        let endpoints = vec![
            "start e0".to_string(),
            "end e0".to_string(),
            "start e1".to_string(),
        ];
        let index = EndpointIndex::new(&endpoints).unwrap();
        assert_eq!(index.position("start e0"), Some(0));
        assert_eq!(index.position("start e1"), Some(2));
        assert_eq!(index.position("end e1"), None);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn duplicates_are_rejected() {
        let endpoints = vec!["start e0".to_string(), "start e0".to_string()];
        let err = EndpointIndex::new(&endpoints).unwrap_err();
        assert!(matches!(err, BoardError::DuplicateEndpoint(e) if e == "start e0"));
    }
}
