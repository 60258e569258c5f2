//! partial-change core - exact-change assertions over nested structures
//!
//! Verifies that a block of code changed exactly a declared set of locations
//! inside a nested map, and optionally that those locations held given values
//! before and after. This crate provides:
//! - Snapshot capture by explicit structural deep copy, with digests
//! - Leaf path extraction at maximum depth (prefix-free)
//! - Diff resolution between two snapshots at candidate paths
//! - Expectation matching: exact path-set equality plus `from`/`to` partials
//! - A `partial_change` matcher builder and an `expect(..)` assertion front-end
//! - Failure message and summary rendering
//!
//! ```
//! use partial_change_core::assertion::expect;
//! use partial_change_core::{partial_change, path};
//! use serde_json::json;
//!
//! let mut object = json!({"user": {"address": {"city": "NY", "zip": "10001"}}});
//!
//! let result = expect(&mut object)
//!     .when(|o| {
//!         o["user"]["address"]["city"] = json!("SF");
//!         o["user"]["address"]["zip"] = json!("94103");
//!     })
//!     .to(partial_change([path!("user", "address", "city")]));
//!
//! assert!(result.is_err());
//! ```

pub mod assertion;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod matcher;
pub mod model;
pub mod report;
pub mod snapshot;

pub use partial_change_core_types::schema;

// Re-export commonly used types
pub use assertion::{assert_partial_change, expect};
pub use errors::{ExError, ExErrorKind, PartialChangeError, Result};
pub use matcher::{partial_change, Evaluation, PartialChange};
pub use model::{Path, PathSet};
pub use snapshot::{Observable, Snapshot};
