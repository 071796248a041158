//! Topic generators, one module per quiz topic.
//!
//! Every module exposes the same entry point:
//!
//! ```ignore
//! pub fn generate<R: Rng>(rng: &mut R, question_id: String) -> Question
//! ```
//!
//! plus a deterministic `build*` function that takes the already-drawn
//! parameters, so callers and tests can pin a specific instance.
//! The generator dispatches to these via `generator.rs`.

/// CI-: Caesar cipher over A..Z
pub mod cipher;
/// CO-: permutations and combinations
pub mod combinatorics;
/// GR-: shortest path on fixed weighted digraphs
pub mod graph;
/// RE-: reflexive / symmetric / transitive classification
pub mod relations;
