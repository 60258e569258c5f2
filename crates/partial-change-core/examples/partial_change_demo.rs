//! Partial change demo
//!
//! Walks through the main assertion shapes:
//! - An exact single-path change
//! - An undeclared change caught as a failure
//! - Nested `from`/`to` expectations
//! - The Markdown summary of a failed evaluation

use partial_change_core::assertion::expect;
use partial_change_core::logging_facility::{init, Profile};
use partial_change_core::report::render_summary;
use partial_change_core::{partial_change, path};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init(Profile::Development);

    println!("=== Partial Change Demo ===\n");

    // Part 1: exactly the declared path changes
    println!("## Part 1: Exact change\n");
    let mut object = json!({"a": 1, "b": 2, "c": 3});
    let evaluation = expect(&mut object)
        .when(|o| o["b"] = json!(99))
        .to(partial_change([path!("b")]))?;
    println!("✓ changed {}\n", evaluation.changed());

    // Part 2: an extra change fails the assertion
    println!("## Part 2: Undeclared change\n");
    let mut object = json!({"a": 1, "b": 2, "c": 3});
    let err = match expect(&mut object)
        .when(|o| {
            o["a"] = json!(10);
            o["b"] = json!(20);
        })
        .to(partial_change([path!("b")]))
    {
        Ok(_) => return Err("undeclared change was not detected".into()),
        Err(err) => err,
    };
    println!("✗ {}", err);

    // Part 3: nested from/to
    println!("## Part 3: Nested from/to\n");
    let mut user = json!({"user": {"name": "John", "address": {"city": "New York", "zip": "10001"}}});
    expect(&mut user)
        .when(|u| u["user"]["address"]["city"] = json!("San Francisco"))
        .to(partial_change([path!("user", "address", "city")])
            .from(json!({"user": {"address": {"city": "New York"}}}))
            .to(json!({"user": {"address": {"city": "San Francisco"}}})))?;
    println!("✓ user.address.city moved to San Francisco\n");

    // Part 4: summary
    println!("## Part 4: Summary\n");
    if let Some(evaluation) = err.evaluation() {
        println!("{}", render_summary(evaluation));
    }

    Ok(())
}
