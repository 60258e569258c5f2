use serde_json::{json, Map, Value};

/// Flat object used by the single-level scenarios
#[allow(dead_code)]
pub fn flat_object() -> Value {
    json!({"a": 1, "b": 2, "c": 3})
}

/// Nested user record used by the multi-level scenarios
#[allow(dead_code)]
pub fn nested_user() -> Value {
    json!({
        "user": {
            "name": "Alice",
            "address": {
                "city": "New York",
                "zip": "10001"
            }
        }
    })
}

/// Partial structure holding only `user.address.city`
#[allow(dead_code)]
pub fn city(value: &str) -> Value {
    json!({"user": {"address": {"city": value}}})
}

/// `{"k": {"k": ... {"k": leaf}}}` nested `depth` times, built without
/// recursion
#[allow(dead_code)]
pub fn chain(depth: usize, leaf: Value) -> Value {
    let mut value = leaf;
    for _ in 0..depth {
        let mut map = Map::new();
        map.insert("k".to_string(), value);
        value = Value::Object(map);
    }
    value
}
