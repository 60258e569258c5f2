//! Human-readable rendering of an [`Evaluation`].
//!
//! - [`render_failure_message`] - plain-text message for a failed assertion
//! - [`render_summary`] - Markdown summary for review output
//!
//! Rendering is informational only and never affects the verdict.

use serde_json::Value;

use crate::matcher::{Evaluation, PartialCheck};
use crate::model::{Path, PathSet};

/// Placeholder printed for an absent value.
pub const MISSING: &str = "<missing>";

/// Render a value as compact JSON, or [`MISSING`] when absent.
pub fn render_value(value: Option<&Value>) -> String {
    value.map_or_else(|| MISSING.to_string(), Value::to_string)
}

/// Render the failure message for an evaluation.
///
/// Lists undeclared changes, declared paths that did not change, and every
/// path where a `from`/`to` expectation did not hold. Returns an empty string
/// when the evaluation matched.
pub fn render_failure_message(evaluation: &Evaluation) -> String {
    if evaluation.is_match() {
        return String::new();
    }

    let mut out = String::new();

    if !evaluation.paths_match() {
        out.push_str(&format!(
            "expected exactly {} to change, but {} changed\n",
            evaluation.declared(),
            evaluation.changed()
        ));

        for change in evaluation.describe(&evaluation.unexpected_changes()) {
            out.push_str(&format!(
                "  unexpected change at `{}`: {} -> {}\n",
                change.path,
                render_value(change.before.as_ref()),
                render_value(change.after.as_ref()),
            ));
        }

        for path in evaluation.missing_changes().iter() {
            out.push_str(&format!(
                "  no change at `{}`: still {}\n",
                path,
                render_value(evaluation.after().get(path)),
            ));
        }
    }

    for path in mismatched_paths(evaluation).iter() {
        out.push_str(&render_value_expectation(evaluation, path));
        out.push('\n');
    }

    out
}

/// Paths where either partial expectation failed.
fn mismatched_paths(evaluation: &Evaluation) -> PathSet {
    [evaluation.from_check(), evaluation.to_check()]
        .into_iter()
        .flatten()
        .flat_map(|check| check.mismatches.iter().map(|m| m.path.clone()))
        .collect()
}

/// "expected `p` to change from X to Y, but it changed from A to B"
fn render_value_expectation(evaluation: &Evaluation, path: &Path) -> String {
    let expected_from = evaluation.from_check().and_then(|c| declared_value(c, path));
    let expected_to = evaluation.to_check().and_then(|c| declared_value(c, path));
    let actual_before = render_value(evaluation.before().get(path));
    let actual_after = render_value(evaluation.after().get(path));

    match (expected_from, expected_to) {
        (Some(from), Some(to)) => format!(
            "expected `{}` to change from {} to {}, but it changed from {} to {}",
            path, from, to, actual_before, actual_after
        ),
        (Some(from), None) => format!(
            "expected `{}` to change from {}, but it was {}",
            path, from, actual_before
        ),
        (None, Some(to)) => format!(
            "expected `{}` to change to {}, but it became {}",
            path, to, actual_after
        ),
        (None, None) => format!("unexpected value at `{}`", path),
    }
}

fn declared_value(check: &PartialCheck, path: &Path) -> Option<String> {
    check.expected_at(path).map(|v| v.to_string())
}

/// Render a Markdown summary of an evaluation.
pub fn render_summary(evaluation: &Evaluation) -> String {
    let mut out = String::new();

    out.push_str("## Partial Change\n\n");

    let verdict = if evaluation.is_match() {
        "Match"
    } else {
        "Mismatch"
    };
    out.push_str(&format!("**Verdict**: {verdict}\n\n"));

    out.push_str(&format!(
        "| | Digest |\n\
         |---|---|\n\
         | Before | `{}` |\n\
         | After | `{}` |\n\n",
        short(evaluation.before().digest()),
        short(evaluation.after().digest()),
    ));

    out.push_str(&format!(
        "- **Declared** ({}): {}\n",
        evaluation.declared().len(),
        evaluation.declared()
    ));
    out.push_str(&format!(
        "- **Changed** ({}): {}\n",
        evaluation.changed().len(),
        evaluation.changed()
    ));

    let changes = evaluation.changes();
    if !changes.is_empty() {
        out.push_str("\n### Changes\n\n");
        out.push_str("| Path | Before | After |\n|---|---|---|\n");
        for change in changes {
            out.push_str(&format!(
                "| `{}` | `{}` | `{}` |\n",
                change.path,
                render_value(change.before.as_ref()),
                render_value(change.after.as_ref()),
            ));
        }
    }

    if !evaluation.is_match() {
        out.push_str("\n### Failures\n\n");
        for line in render_failure_message(evaluation).lines() {
            out.push_str(&format!("- {}\n", line.trim_start()));
        }
    }

    out
}

/// Truncate a digest to 12 characters for display.
fn short(digest: &str) -> &str {
    digest.get(..12).unwrap_or(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::evaluate;
    use crate::path;
    use crate::snapshot::Snapshot;
    use serde_json::json;

    fn run(before: Value, after: Value, declared: PathSet) -> Evaluation {
        evaluate(
            Snapshot::capture(&before).unwrap(),
            Snapshot::capture(&after).unwrap(),
            &declared,
            None,
            None,
        )
    }

    #[test]
    fn test_render_value_missing() {
        assert_eq!(render_value(None), "<missing>");
        assert_eq!(render_value(Some(&json!("NY"))), "\"NY\"");
    }

    #[test]
    fn test_matching_evaluation_has_no_message() {
        let evaluation = run(json!({"a": 1}), json!({"a": 2}), PathSet::from([path!("a")]));
        assert_eq!(render_failure_message(&evaluation), "");
    }

    #[test]
    fn test_message_lists_unexpected_and_missing() {
        let evaluation = run(
            json!({"a": 1, "b": 2}),
            json!({"a": 10, "b": 2}),
            PathSet::from([path!("b")]),
        );

        let message = render_failure_message(&evaluation);

        assert!(message.contains("expected exactly {b} to change, but {a} changed"));
        assert!(message.contains("unexpected change at `a`: 1 -> 10"));
        assert!(message.contains("no change at `b`: still 2"));
    }

    #[test]
    fn test_summary_contains_digests_and_changes() {
        let evaluation = run(json!({"a": 1}), json!({"a": 2}), PathSet::from([path!("a")]));
        let summary = render_summary(&evaluation);

        assert!(summary.contains("**Verdict**: Match"));
        assert!(summary.contains(short(evaluation.before().digest())));
        assert!(summary.contains("| `a` | `1` | `2` |"));
        assert!(!summary.contains("### Failures"));
    }
}
