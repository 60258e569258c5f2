//! Expectation matching over a before/after snapshot pair.
//!
//! The core entry point is [`evaluate`], which resolves the actually-changed
//! paths against the declared ones and checks optional `from`/`to` partial
//! structures. It is pure: the caller captures the snapshots.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;
use std::time::Instant;

use crate::diff::leaf_paths::{collapse_prefixes, leaf_paths};
use crate::diff::model::{ValueChange, ValueMismatch};
use crate::diff::resolver::{changed_paths, describe_changes, resolve, same_value};
use crate::model::{Path, PathSet};
use crate::schema::OP_EVALUATE;
use crate::snapshot::{deep_copy, Snapshot};
use crate::{log_op_end, log_op_start};

/// Outcome of checking one partial structure against a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartialCheck {
    /// The partial structure as supplied
    pub expected: Value,
    /// Leaf paths of `expected` whose values did not match
    pub mismatches: Vec<ValueMismatch>,
}

impl PartialCheck {
    /// True if every leaf of the partial structure matched
    pub fn holds(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Expected value at `path`, if the partial structure declares one
    pub fn expected_at(&self, path: &Path) -> Option<&Value> {
        resolve(&self.expected, path)
    }
}

/// Everything one evaluation observed.
///
/// Retains both snapshots and every computed path set so a failure can be
/// reported in full. Dropped together with its snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    before: Snapshot,
    after: Snapshot,
    declared: PathSet,
    candidates: PathSet,
    changed: PathSet,
    from: Option<PartialCheck>,
    to: Option<PartialCheck>,
}

impl Evaluation {
    /// The verdict: exact path-set match and every supplied partial holds
    pub fn is_match(&self) -> bool {
        self.paths_match()
            && self.from.as_ref().map_or(true, PartialCheck::holds)
            && self.to.as_ref().map_or(true, PartialCheck::holds)
    }

    /// True if the changed paths equal the declared paths exactly
    pub fn paths_match(&self) -> bool {
        self.changed == self.declared
    }

    pub fn before(&self) -> &Snapshot {
        &self.before
    }

    pub fn after(&self) -> &Snapshot {
        &self.after
    }

    pub fn declared(&self) -> &PathSet {
        &self.declared
    }

    /// Paths that were compared
    pub fn candidates(&self) -> &PathSet {
        &self.candidates
    }

    /// Paths whose values differ between the snapshots
    pub fn changed(&self) -> &PathSet {
        &self.changed
    }

    /// Changed but not declared
    pub fn unexpected_changes(&self) -> PathSet {
        self.changed.difference(&self.declared)
    }

    /// Declared but not changed
    pub fn missing_changes(&self) -> PathSet {
        self.declared.difference(&self.changed)
    }

    pub fn from_check(&self) -> Option<&PartialCheck> {
        self.from.as_ref()
    }

    pub fn to_check(&self) -> Option<&PartialCheck> {
        self.to.as_ref()
    }

    /// Before/after values at every changed path
    pub fn changes(&self) -> Vec<ValueChange> {
        describe_changes(&self.before, &self.after, &self.changed)
    }

    /// Before/after values at the given paths
    pub fn describe(&self, paths: &PathSet) -> Vec<ValueChange> {
        describe_changes(&self.before, &self.after, paths)
    }
}

/// Compute the paths the diff compares.
///
/// Takes the leaf paths of both snapshots, collapses prefixes across the
/// union, then replaces every path equal to or beneath a declared path with
/// that declared path. Declaring `user.address` thus compares the whole
/// address instead of its leaves.
pub fn candidate_paths(before: &Snapshot, after: &Snapshot, declared: &PathSet) -> PathSet {
    let natural: BTreeSet<Path> = before
        .leaf_paths()
        .into_iter()
        .chain(after.leaf_paths())
        .collect();

    let mut candidates: PathSet = collapse_prefixes(natural)
        .into_iter()
        .filter(|path| declared.covering(path).is_none())
        .collect();
    candidates.extend(declared.iter().cloned());
    candidates
}

/// Check a partial structure against a snapshot at the partial's leaf paths.
pub fn check_partial(snapshot: &Snapshot, expected: &Value) -> PartialCheck {
    let mut mismatches = Vec::new();
    for path in leaf_paths(expected) {
        let Some(wanted) = resolve(expected, &path) else {
            continue;
        };
        let actual = snapshot.get(&path);
        if !same_value(actual, Some(wanted)) {
            mismatches.push(ValueMismatch {
                expected: deep_copy(wanted),
                actual: actual.map(deep_copy),
                path,
            });
        }
    }
    PartialCheck {
        expected: deep_copy(expected),
        mismatches,
    }
}

/// Evaluate a before/after snapshot pair against the declared expectation.
///
/// Steps:
/// 1. candidate paths ([`candidate_paths`])
/// 2. changed subset of the candidates
/// 3. changed must equal `declared` exactly
/// 4. `from`, if supplied, must match `before` at each of its leaf paths
/// 5. `to`, if supplied, must match `after` at each of its leaf paths
///
/// The verdict is [`Evaluation::is_match`].
pub fn evaluate(
    before: Snapshot,
    after: Snapshot,
    declared: &PathSet,
    from: Option<&Value>,
    to: Option<&Value>,
) -> Evaluation {
    let start = Instant::now();
    log_op_start!(OP_EVALUATE, declared_len = declared.len());

    let candidates = candidate_paths(&before, &after, declared);
    let changed = if before.digest() == after.digest() {
        tracing::debug!(digest = before.digest(), "snapshots identical, diff skipped");
        PathSet::new()
    } else {
        changed_paths(&before, &after, &candidates)
    };

    let from = from.map(|expected| check_partial(&before, expected));
    let to = to.map(|expected| check_partial(&after, expected));

    let evaluation = Evaluation {
        before,
        after,
        declared: declared.clone(),
        candidates,
        changed,
        from,
        to,
    };

    if !evaluation.paths_match() {
        tracing::debug!(
            unexpected = %evaluation.unexpected_changes(),
            missing = %evaluation.missing_changes(),
            "changed paths differ from declared paths"
        );
    }

    log_op_end!(
        OP_EVALUATE,
        duration_ms = start.elapsed().as_millis() as u64,
        candidate_len = evaluation.candidates.len(),
        changed_len = evaluation.changed.len(),
        verdict = evaluation.is_match()
    );

    evaluation
}
