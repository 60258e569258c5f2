//! Structural diff over snapshots.
//!
//! ## Entry points
//!
//! ```
//! use partial_change_core::diff::{changed_paths, leaf_paths};
//! use partial_change_core::snapshot::Snapshot;
//! use serde_json::json;
//!
//! let before = Snapshot::capture(&json!({"a": 1, "b": {"c": 2}})).unwrap();
//! let after = Snapshot::capture(&json!({"a": 1, "b": {"c": 3}})).unwrap();
//! let changed = changed_paths(&before, &after, &leaf_paths(before.root()));
//! assert_eq!(changed.to_string(), "{b.c}");
//! ```
//!
//! ## Guarantees
//!
//! - **Maximum depth**: candidate paths are leaf paths, so changes are
//!   reported at the deepest distinguishable location.
//! - **Prefix freedom**: [`leaf_paths`] never returns a path together with one
//!   of its ancestors.
//! - **Determinism**: results depend only on the inputs.

pub mod leaf_paths;
pub mod model;
pub mod resolver;

pub use leaf_paths::{collapse_prefixes, leaf_paths};
pub use model::{ValueChange, ValueMismatch};
pub use resolver::{changed_paths, describe_changes, resolve, same_value};
