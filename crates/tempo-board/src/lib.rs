//! # tempo-board
//!
//! The temporal relation board model.
//!
//! A board is a square matrix over entity endpoints. Each cell is either
//! unclassified, masked (structurally not annotatable), or classified with
//! a relation. Two variants exist:
//!
//! - [`board::Board`] — the server-authoritative board. Built from a wire
//!   payload with shape checking, replaced wholesale after every mutating
//!   request. Which cells are masked is opaque server policy; the client
//!   derives visibility purely from the returned sentinels and never
//!   assumes a triangular layout.
//! - [`local::LocalBoard`] — the legacy, fully client-side board. The
//!   client owns the cell domain here (ordered pairs `(i, j)` with `i < j`
//!   whose endpoints belong to different entities) and asks the backend
//!   only for the temporal closure of its asserted cells, re-projecting
//!   the result through [`closure::apply_closure`].

pub mod board;
pub mod cell;
pub mod closure;
pub mod index;
pub mod local;

mod error;

pub use error::BoardError;
