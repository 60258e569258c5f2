//! Diff resolution between two snapshots.

use serde_json::Value;

use crate::diff::model::ValueChange;
use crate::model::{Path, PathSet};
use crate::snapshot::{deep_copy, deep_equal, Snapshot};

/// Resolve the value at `path` by descending key by key.
///
/// Returns `None` when any key along the path is absent or when an
/// intermediate value is not a map.
pub fn resolve<'a>(structure: &'a Value, path: &Path) -> Option<&'a Value> {
    path.keys()
        .iter()
        .try_fold(structure, |current, key| current.as_object()?.get(key))
}

/// Return the candidate paths whose values differ between `before` and `after`.
///
/// A path missing on one side counts as a distinct value, so added and
/// removed keys are reported as changes. Values compare by deep equality.
/// The result depends only on the inputs, never on traversal order.
pub fn changed_paths(before: &Snapshot, after: &Snapshot, candidates: &PathSet) -> PathSet {
    candidates
        .iter()
        .filter(|path| !same_value(before.get(path), after.get(path)))
        .cloned()
        .collect()
}

/// Deep equality over possibly-absent values; absent equals only absent.
pub fn same_value(left: Option<&Value>, right: Option<&Value>) -> bool {
    match (left, right) {
        (Some(a), Some(b)) => deep_equal(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Describe the before/after values at each of `paths`.
pub fn describe_changes(before: &Snapshot, after: &Snapshot, paths: &PathSet) -> Vec<ValueChange> {
    paths
        .iter()
        .map(|path| ValueChange {
            path: path.clone(),
            before: before.get(path).map(deep_copy),
            after: after.get(path).map(deep_copy),
        })
        .collect()
}
