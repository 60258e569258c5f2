//! Assertion front-end.
//!
//! Turns a matcher evaluation into a pass/fail signal:
//!
//! ```
//! use partial_change_core::assertion::expect;
//! use partial_change_core::{partial_change, path};
//! use serde_json::json;
//!
//! let mut object = json!({"a": 1, "b": 2, "c": 3});
//!
//! expect(&mut object)
//!     .when(|o| o["b"] = json!(99))
//!     .to(partial_change([path!("b")]))
//!     .unwrap();
//! ```
//!
//! A false verdict becomes `PartialChangeError::AssertionFailed` carrying the
//! rendered message and the full evaluation. The negated form is a usage
//! error, never a verdict.

use crate::errors::{PartialChangeError, Result};
use crate::matcher::{Evaluation, PartialChange};
use crate::report::render_failure_message;
use crate::snapshot::Observable;

/// Start an expectation on `target`
pub fn expect<T: Observable + ?Sized>(target: &mut T) -> Expect<'_, T> {
    Expect { target }
}

/// Target awaiting its mutating block
pub struct Expect<'a, T: ?Sized> {
    target: &'a mut T,
}

impl<'a, T: Observable + ?Sized> Expect<'a, T> {
    /// Attach the block whose effect is asserted
    pub fn when<F: FnOnce(&mut T)>(self, block: F) -> ExpectBlock<'a, T, F> {
        ExpectBlock {
            target: self.target,
            block,
        }
    }
}

/// Target and block awaiting a matcher
pub struct ExpectBlock<'a, T: ?Sized, F> {
    target: &'a mut T,
    block: F,
}

impl<'a, T, F> ExpectBlock<'a, T, F>
where
    T: Observable + ?Sized,
    F: FnOnce(&mut T),
{
    /// Assert that the block changes exactly what `matcher` declares
    ///
    /// # Errors
    /// * `AssertionFailed` - If the verdict is false
    /// * `NotAStructure` / `Serialization` - If evaluation cannot run
    pub fn to(self, matcher: PartialChange) -> Result<Evaluation> {
        let evaluation = matcher.evaluate(self.target, self.block)?;
        if evaluation.is_match() {
            return Ok(evaluation);
        }
        Err(PartialChangeError::AssertionFailed {
            message: render_failure_message(&evaluation),
            evaluation: Box::new(evaluation),
        })
    }

    /// Negated form, which is not supported
    ///
    /// # Errors
    /// * `NegatedUsage` - Always; the block never runs
    pub fn not_to(self, matcher: PartialChange) -> Result<Evaluation> {
        matcher.evaluate_negated(self.target, self.block)
    }
}

/// Panic unless `block` changes exactly what `matcher` declares
///
/// # Panics
/// Panics with the rendered failure message on a false verdict, or with the
/// error message if the evaluation cannot run.
#[track_caller]
pub fn assert_partial_change<T, F>(target: &mut T, matcher: PartialChange, block: F) -> Evaluation
where
    T: Observable + ?Sized,
    F: FnOnce(&mut T),
{
    match expect(target).when(block).to(matcher) {
        Ok(evaluation) => evaluation,
        Err(err) => panic!("{}", err),
    }
}
