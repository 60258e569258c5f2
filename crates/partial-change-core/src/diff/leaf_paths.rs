//! Leaf path extraction.
//!
//! Diffing runs at maximum depth: a change to `user.address.city` is reported
//! as exactly that path, never also as a change to `user.address` or `user`.

use serde_json::Value;
use std::collections::BTreeSet;

use crate::model::{Path, PathSet};

/// Extract the leaf paths of a structure.
///
/// A path survives exactly when no other key path extends it: a key holding
/// a non-empty map is excluded, a key holding a scalar, an array or an empty
/// map is kept. An empty structure, or a value that is not a map, yields an
/// empty set.
///
/// The walk keeps the keys of the current branch on a work stack and only
/// builds a [`Path`] at each leaf, so neither the call stack nor the
/// intermediate paths grow with nesting depth.
pub fn leaf_paths(structure: &Value) -> PathSet {
    let mut leaves = PathSet::new();
    let Some(root) = structure.as_object() else {
        return leaves;
    };

    let mut branch: Vec<&str> = Vec::new();
    let mut pending: Vec<(usize, &str, &Value)> = root
        .iter()
        .map(|(key, value)| (0, key.as_str(), value))
        .collect();

    while let Some((depth, key, value)) = pending.pop() {
        branch.truncate(depth);
        branch.push(key);
        match value {
            Value::Object(map) if !map.is_empty() => {
                pending.extend(map.iter().map(|(k, v)| (depth + 1, k.as_str(), v)));
            }
            _ => {
                // branch is never empty here
                if let Ok(path) = Path::new(branch.iter().copied()) {
                    leaves.insert(path);
                }
            }
        }
    }

    leaves
}

/// Drop every path that is a strict prefix of another path in the set.
///
/// In key-sequence order every extension of `p` sorts after `p` and before
/// any path that does not extend it, so `p` has an extension iff its
/// immediate successor is one.
pub fn collapse_prefixes(paths: BTreeSet<Path>) -> PathSet {
    let mut collapsed = PathSet::new();
    let mut ordered = paths.into_iter().peekable();

    while let Some(path) = ordered.next() {
        let extended = ordered
            .peek()
            .is_some_and(|next| path.is_strict_prefix_of(next));
        if !extended {
            collapsed.insert(path);
        }
    }

    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use crate::snapshot::release;
    use serde_json::json;

    #[test]
    fn test_flat_structure_yields_every_key() {
        let paths = leaf_paths(&json!({"a": 1, "b": 2, "c": 3}));
        assert_eq!(paths, PathSet::from([path!("a"), path!("b"), path!("c")]));
    }

    #[test]
    fn test_nested_structure_yields_deepest_keys_only() {
        let structure = json!({
            "user": {
                "name": "Alice",
                "address": {"city": "New York", "zip": "10001"}
            }
        });

        let paths = leaf_paths(&structure);

        assert_eq!(
            paths,
            PathSet::from([
                path!("user", "name"),
                path!("user", "address", "city"),
                path!("user", "address", "zip"),
            ])
        );
    }

    #[test]
    fn test_empty_map_is_a_leaf() {
        let paths = leaf_paths(&json!({"meta": {}, "n": 1}));
        assert_eq!(paths, PathSet::from([path!("meta"), path!("n")]));
    }

    #[test]
    fn test_array_is_an_opaque_leaf() {
        let paths = leaf_paths(&json!({"tags": [{"x": 1}, {"y": 2}]}));
        assert_eq!(paths, PathSet::from([path!("tags")]));
    }

    #[test]
    fn test_empty_and_non_map_inputs_yield_nothing() {
        assert!(leaf_paths(&json!({})).is_empty());
        assert!(leaf_paths(&json!(42)).is_empty());
        assert!(leaf_paths(&json!(["a"])).is_empty());
    }

    #[test]
    fn test_collapse_drops_ancestors() {
        let paths = BTreeSet::from([path!("a"), path!("a", "b"), path!("a", "b", "c"), path!("d")]);
        assert_eq!(
            collapse_prefixes(paths),
            PathSet::from([path!("a", "b", "c"), path!("d")])
        );
    }

    #[test]
    fn test_collapse_keeps_siblings_that_share_a_textual_prefix() {
        let paths = BTreeSet::from([path!("user"), path!("username")]);
        assert_eq!(
            collapse_prefixes(paths),
            PathSet::from([path!("user"), path!("username")])
        );
    }

    #[test]
    fn test_deep_nesting_yields_single_leaf() {
        let depth = 20_000;
        let mut structure = json!(1);
        for _ in 0..depth {
            let mut map = serde_json::Map::new();
            map.insert("k".to_string(), structure);
            structure = Value::Object(map);
        }

        let paths = leaf_paths(&structure);

        assert_eq!(paths.len(), 1);
        assert_eq!(paths.iter().next().map(Path::len), Some(depth));
        release(structure);
    }
}
