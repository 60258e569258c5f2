//! `from` / `to` partial structure checks.

mod common;

use common::{city, nested_user};
use partial_change_core::{partial_change, path, PartialChangeError};
use serde_json::json;

#[test]
fn test_from_mismatch_fails_with_correct_paths() {
    let mut object = nested_user();

    let evaluation = partial_change([path!("user", "address", "city")])
        .from(city("Boston"))
        .evaluate(&mut object, |o| o["user"]["address"]["city"] = json!("SF"))
        .unwrap();

    assert!(evaluation.paths_match());
    assert!(!evaluation.is_match());
    let check = evaluation.from_check().unwrap();
    assert_eq!(check.mismatches.len(), 1);
    assert_eq!(check.mismatches[0].expected, json!("Boston"));
    assert_eq!(check.mismatches[0].actual, Some(json!("New York")));
}

#[test]
fn test_to_mismatch_fails() {
    let mut object = nested_user();

    let evaluation = partial_change([path!("user", "address", "city")])
        .to(city("San Francisco"))
        .evaluate(&mut object, |o| o["user"]["address"]["city"] = json!("Los Angeles"))
        .unwrap();

    assert!(!evaluation.is_match());
    assert!(evaluation.from_check().is_none());
    assert!(!evaluation.to_check().unwrap().holds());
}

#[test]
fn test_only_from_supplied_is_enough() {
    let mut object = nested_user();

    let evaluation = partial_change([path!("user", "address", "city")])
        .from(city("New York"))
        .evaluate(&mut object, |o| o["user"]["address"]["city"] = json!("SF"))
        .unwrap();

    assert!(evaluation.is_match());
}

#[test]
fn test_only_to_supplied_is_enough() {
    let mut object = nested_user();

    let evaluation = partial_change([path!("user", "address", "city")])
        .to(city("SF"))
        .evaluate(&mut object, |o| o["user"]["address"]["city"] = json!("SF"))
        .unwrap();

    assert!(evaluation.is_match());
}

#[test]
fn test_partials_may_assert_unchanged_locations() {
    let mut object = nested_user();

    let evaluation = partial_change([path!("user", "address", "city")])
        .from(json!({"user": {"name": "Alice", "address": {"city": "New York"}}}))
        .to(json!({"user": {"name": "Alice", "address": {"city": "SF"}}}))
        .evaluate(&mut object, |o| o["user"]["address"]["city"] = json!("SF"))
        .unwrap();

    assert!(evaluation.is_match());
}

#[test]
fn test_partial_checks_are_independent_of_declared_paths() {
    let mut object = nested_user();

    // Path set matches; `to` names a location nobody declared and is wrong.
    let evaluation = partial_change([path!("user", "address", "city")])
        .to(json!({"user": {"name": "Bob"}}))
        .evaluate(&mut object, |o| o["user"]["address"]["city"] = json!("SF"))
        .unwrap();

    assert!(evaluation.paths_match());
    assert!(!evaluation.is_match());
    assert_eq!(
        evaluation.to_check().unwrap().mismatches[0].path,
        path!("user", "name")
    );
}

#[test]
fn test_partial_naming_absent_location_fails() {
    let mut object = nested_user();

    let evaluation = partial_change([path!("user", "address", "city")])
        .to(json!({"user": {"phone": "555"}}))
        .evaluate(&mut object, |o| o["user"]["address"]["city"] = json!("SF"))
        .unwrap();

    assert!(!evaluation.is_match());
    assert_eq!(evaluation.to_check().unwrap().mismatches[0].actual, None);
}

#[test]
fn test_failure_message_describes_from_and_to() {
    let mut object = nested_user();

    let err = partial_change_core::expect(&mut object)
        .when(|o| o["user"]["address"]["city"] = json!("Los Angeles"))
        .to(partial_change([path!("user", "address", "city")])
            .from(city("New York"))
            .to(city("San Francisco")))
        .unwrap_err();

    assert!(matches!(err, PartialChangeError::AssertionFailed { .. }));
    assert!(err.to_string().contains(
        "expected `user.address.city` to change from \"New York\" to \"San Francisco\", \
         but it changed from \"New York\" to \"Los Angeles\""
    ));
}

#[test]
fn test_non_map_from_is_rejected() {
    let mut object = nested_user();

    let err = partial_change([path!("user", "name")])
        .from(json!(["Alice"]))
        .evaluate(&mut object, |o| o["user"]["name"] = json!("Bob"))
        .unwrap_err();

    assert_eq!(
        err,
        PartialChangeError::NotAStructure {
            role: "from expectation".to_string(),
            found: "array".to_string(),
        }
    );
    assert_eq!(object["user"]["name"], json!("Alice"));
}
