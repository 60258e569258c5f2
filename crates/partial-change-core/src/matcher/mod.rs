//! Expectation matching.
//!
//! - [`expectation`] - pure evaluation of a before/after snapshot pair
//! - [`partial_change`] - builder that captures snapshots around a block

pub mod expectation;
pub mod partial_change;

pub use expectation::{candidate_paths, check_partial, evaluate, Evaluation, PartialCheck};
pub use partial_change::{partial_change, PartialChange};
