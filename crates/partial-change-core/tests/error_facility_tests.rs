use partial_change_core::errors::{ExError, ExErrorKind};
use partial_change_core::{expect, partial_change, path, Path, PartialChangeError};
use serde_json::json;

#[test]
fn test_empty_path_error() {
    let keys: Vec<&str> = Vec::new();
    let err = Path::new(keys).unwrap_err();

    let ex: ExError = err.into();
    assert_eq!(ex.kind(), ExErrorKind::EmptyPath);
    assert_eq!(ex.code(), "ERR_EMPTY_PATH");
}

#[test]
fn test_not_a_structure_maps_to_code() {
    let err = PartialChangeError::NotAStructure {
        role: "target".to_string(),
        found: "null".to_string(),
    };
    assert_eq!(err.to_string(), "target must be a map-like structure, found null");

    let ex: ExError = err.into();
    assert_eq!(ex.code(), "ERR_NOT_A_STRUCTURE");
}

#[test]
fn test_assertion_failure_maps_with_first_offending_path() {
    let mut object = json!({"a": 1, "b": 2});
    let err = expect(&mut object)
        .when(|o| o["a"] = json!(3))
        .to(partial_change([path!("b")]))
        .unwrap_err();

    let ex: ExError = err.into();
    assert_eq!(ex.kind(), ExErrorKind::AssertionFailed);
    assert_eq!(ex.op(), Some("partial_change.evaluate"));
    assert_eq!(ex.path(), Some("a"));
}

#[test]
fn test_serialization_error_maps_to_code() {
    let ex: ExError = PartialChangeError::Serialization {
        message: "key must be a string".to_string(),
    }
    .into();
    assert_eq!(ex.kind(), ExErrorKind::Serialization);
    assert_eq!(ex.message(), "key must be a string");
}
