//! Entity endpoints and their canonical display form.
//!
//! An endpoint is the start or end instant of an entity, treated as an
//! independent node for relation annotation. The wire protocol identifies
//! endpoints by display strings of the shape `"start e0"` / `"end e0"`
//! (instant entities collapse to a single `"instant e0"` on the server
//! side). The client never re-derives the server's endpoint ordering
//! mid-session; it consumes the `endpoints` array returned with each board
//! and indexes purely positionally.

use std::fmt;
use std::str::FromStr;

use crate::entity::Entity;
use crate::errors::CoreError;

/// Which instant of an entity an endpoint refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    Start,
    End,
    /// Coincident start/end of an instant entity, as emitted by the server.
    Instant,
}

impl EndpointKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Instant => "instant",
        }
    }
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed endpoint identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub kind: EndpointKind,
    pub entity_id: String,
}

impl Endpoint {
    #[must_use]
    pub fn new(kind: EndpointKind, entity_id: impl Into<String>) -> Self {
        Self {
            kind,
            entity_id: entity_id.into(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.entity_id)
    }
}

impl FromStr for Endpoint {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || CoreError::EndpointParse(s.to_string());
        let (kind, entity_id) = s.split_once(' ').ok_or_else(parse_error)?;
        let kind = match kind {
            "start" => EndpointKind::Start,
            "end" => EndpointKind::End,
            "instant" => EndpointKind::Instant,
            _ => return Err(parse_error()),
        };
        if entity_id.is_empty() || entity_id.contains(' ') {
            return Err(parse_error());
        }
        Ok(Self::new(kind, entity_id))
    }
}

/// Derive the endpoint display strings for an entity list: for each entity
/// in list order, its start endpoint then its end endpoint.
///
/// This is the client-side contract for predicting board size and for
/// building the legacy local board. Server boards ship their own
/// `endpoints` array, which always wins.
#[must_use]
pub fn derive_endpoints(entities: &[Entity]) -> Vec<String> {
    let mut endpoints = Vec::with_capacity(entities.len() * 2);
    for entity in entities {
        endpoints.push(format!("start {}", entity.id));
        endpoints.push(format!("end {}", entity.id));
    }
    endpoints
}
