//! # tempo-core
//!
//! Core domain types for Tempo.
//!
//! This crate provides the types shared across all Tempo crates:
//! - Temporal entities and the spans detected in text
//! - Pairwise relations between entity endpoints, with inversion
//! - Endpoint derivation and the `"start e0"` display form
//! - Document-creation-time (DCT) normalization and its inverse
//! - Upload validation for annotation documents
//! - The exported annotation document format
//! - Entity tag rendering for terminal/text display
//! - Cross-cutting error types
//!
//! No I/O happens here; the HTTP protocol lives in `tempo-client` and the
//! board model in `tempo-board`.

pub mod dct;
pub mod endpoint;
pub mod entity;
pub mod errors;
pub mod export;
pub mod relation;
pub mod tags;
pub mod upload;
