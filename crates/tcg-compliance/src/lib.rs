//! # tcg-compliance — Compliance Scoring
//!
//! Scores a set of generated test cases against the fixed requirement
//! checklists of the supported regulatory standards.
//!
//! ## Two scoring paths
//!
//! - [`score`] — deterministic keyword matching against the static
//!   catalog. Emits only `Covered` / `Not Covered`.
//! - [`score_with_backend`] — delegates gap analysis to the generation
//!   backend and maps its covered/missing lists onto the catalog; any
//!   backend failure falls back to [`score`]. This is the only path that
//!   can emit `Partially Covered`.
//!
//! ## Catalog
//!
//! The standard catalog ([`catalog`]) is read-only and defined at compile
//! time: six standards, each a fixed list of (id, description, severity)
//! requirement triples.

pub mod backend;
pub mod catalog;
pub mod scorer;

pub use backend::score_with_backend;
pub use catalog::{keywords_for, requirements_for, Requirement};
pub use scorer::{compliance_matrix, score, MatrixEntry};
