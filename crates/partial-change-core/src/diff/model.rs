//! Diff output types.
//!
//! All types implement `Debug, Clone, Serialize, PartialEq`. Absent values
//! are `None` so they stay distinct from an explicit `null`.

use serde::Serialize;
use serde_json::Value;

use crate::model::Path;

/// Before/after values observed at one path.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValueChange {
    /// Location of the change
    pub path: Path,
    /// Value before the mutation (`None` if absent)
    pub before: Option<Value>,
    /// Value after the mutation (`None` if absent)
    pub after: Option<Value>,
}

/// A `from`/`to` expectation that did not hold at one path.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValueMismatch {
    /// Leaf path of the partial expectation
    pub path: Path,
    /// Value the partial expectation declares
    pub expected: Value,
    /// Value actually observed (`None` if absent)
    pub actual: Option<Value>,
}
