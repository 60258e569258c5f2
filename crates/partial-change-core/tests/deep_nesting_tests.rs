//! Full evaluations over structures nested far deeper than the call stack
//! would allow a recursive walk to go.

mod common;

use common::chain;
use partial_change_core::snapshot::release;
use partial_change_core::{partial_change, path, Path, PathSet};
use serde_json::{json, Value};

const DEPTH: usize = 10_000;

fn deep_target() -> Value {
    let mut target = serde_json::Map::new();
    target.insert("deep".to_string(), chain(DEPTH, json!("bottom")));
    target.insert("flag".to_string(), json!(1));
    Value::Object(target)
}

fn deepest_path() -> Path {
    Path::new(std::iter::once("deep").chain(std::iter::repeat("k").take(DEPTH))).unwrap()
}

fn deepest_pointer() -> String {
    format!("/deep{}", "/k".repeat(DEPTH))
}

#[test]
fn test_deepest_leaf_change_matches() {
    let mut target = deep_target();

    let evaluation = partial_change([deepest_path()])
        .evaluate(&mut target, |t| {
            *t.pointer_mut(&deepest_pointer()).unwrap() = json!("changed");
        })
        .unwrap();

    assert!(evaluation.is_match());
    assert_eq!(evaluation.changed(), &PathSet::from([deepest_path()]));

    release(target);
}

#[test]
fn test_undeclared_deep_change_fails() {
    let mut target = deep_target();

    let evaluation = partial_change([path!("flag")])
        .evaluate(&mut target, |t| {
            t["flag"] = json!(2);
            *t.pointer_mut(&deepest_pointer()).unwrap() = json!("changed");
        })
        .unwrap();

    assert!(!evaluation.is_match());
    assert_eq!(evaluation.unexpected_changes(), PathSet::from([deepest_path()]));

    release(target);
}

#[test]
fn test_coarse_declaration_compares_deep_subtree() {
    let mut target = deep_target();

    let evaluation = partial_change([path!("deep")])
        .evaluate(&mut target, |t| {
            *t.pointer_mut(&deepest_pointer()).unwrap() = json!("changed");
        })
        .unwrap();

    assert!(evaluation.is_match());
    assert_eq!(evaluation.changed(), &PathSet::from([path!("deep")]));

    release(target);
}

#[test]
fn test_untouched_deep_structure_has_no_changes() {
    let mut target = deep_target();

    let evaluation = partial_change(PathSet::new())
        .evaluate(&mut target, |_| {})
        .unwrap();

    assert!(evaluation.is_match());
    assert_eq!(evaluation.before().digest(), evaluation.after().digest());

    release(target);
}
