//! Explicit structural copy, comparison and release.
//!
//! Every walk here runs on an explicit work stack over the closed set of
//! `serde_json` value kinds, so nesting depth is bounded by memory rather
//! than by the call stack. A copy shares nothing with its input, so later
//! mutation of the live structure can never reach a captured copy.

use serde_json::{Map, Value};

enum CopyStep<'a> {
    Visit(&'a Value),
    Object(&'a Map<String, Value>),
    Array(usize),
}

/// Deep-copy a value.
///
/// Children are copied first and collected on an output stack; each map or
/// array is then assembled from the tail of that stack. Arrays are opaque
/// leaves for diffing but are still copied in full.
pub fn deep_copy(value: &Value) -> Value {
    let mut steps = vec![CopyStep::Visit(value)];
    let mut built: Vec<Value> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            CopyStep::Visit(Value::Object(map)) => {
                steps.push(CopyStep::Object(map));
                steps.extend(map.values().rev().map(CopyStep::Visit));
            }
            CopyStep::Visit(Value::Array(items)) => {
                steps.push(CopyStep::Array(items.len()));
                steps.extend(items.iter().rev().map(CopyStep::Visit));
            }
            CopyStep::Visit(scalar) => built.push(copy_scalar(scalar)),
            CopyStep::Object(map) => {
                let children = built.split_off(built.len() - map.len());
                let copy: Map<String, Value> = map.keys().cloned().zip(children).collect();
                built.push(Value::Object(copy));
            }
            CopyStep::Array(len) => {
                let children = built.split_off(built.len() - len);
                built.push(Value::Array(children));
            }
        }
    }

    built.pop().unwrap_or_default()
}

fn copy_scalar(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.clone()),
        Value::Number(n) => Value::Number(n.clone()),
        Value::Bool(b) => Value::Bool(*b),
        _ => Value::Null,
    }
}

/// Deep-copy a map, preserving every key and its nesting.
pub fn deep_copy_map(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| (key.clone(), deep_copy(value)))
        .collect()
}

/// Structural equality without recursion.
///
/// Agrees with `Value`'s own `==`: maps compare by key set and per-key value,
/// arrays element-wise, scalars directly.
pub fn deep_equal(left: &Value, right: &Value) -> bool {
    let mut pending = vec![(left, right)];

    while let Some(pair) = pending.pop() {
        match pair {
            (Value::Object(a), Value::Object(b)) => {
                if a.len() != b.len() {
                    return false;
                }
                for (key, a_value) in a {
                    match b.get(key) {
                        Some(b_value) => pending.push((a_value, b_value)),
                        None => return false,
                    }
                }
            }
            (Value::Array(a), Value::Array(b)) => {
                if a.len() != b.len() {
                    return false;
                }
                pending.extend(a.iter().zip(b));
            }
            (Value::Object(_) | Value::Array(_), _) | (_, Value::Object(_) | Value::Array(_)) => {
                return false;
            }
            (a, b) => {
                if a != b {
                    return false;
                }
            }
        }
    }

    true
}

/// Drop a value one container at a time.
///
/// `Value`'s own drop glue recurses once per nesting level.
pub fn release(value: Value) {
    let mut pending = vec![value];
    while let Some(value) = pending.pop() {
        match value {
            Value::Object(map) => pending.extend(map.into_iter().map(|(_, child)| child)),
            Value::Array(items) => pending.extend(items),
            _ => {}
        }
    }
}

/// Short name of a value's kind, used in diagnostics.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Object(_) => "object",
        Value::Array(_) => "array",
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "bool",
        Value::Null => "null",
    }
}
