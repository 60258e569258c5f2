//! The `partial_change` matcher.
//!
//! A [`PartialChange`] accumulates the declared paths and the optional
//! `from`/`to` partial structures, then runs one evaluation around a
//! mutating block:
//!
//! ```
//! use partial_change_core::{partial_change, path};
//! use serde_json::json;
//!
//! let mut object = json!({"user": {"address": {"city": "New York", "zip": "10001"}}});
//!
//! let evaluation = partial_change([path!("user", "address", "city")])
//!     .from(json!({"user": {"address": {"city": "New York"}}}))
//!     .to(json!({"user": {"address": {"city": "San Francisco"}}}))
//!     .evaluate(&mut object, |o| {
//!         o["user"]["address"]["city"] = json!("San Francisco");
//!     })
//!     .unwrap();
//!
//! assert!(evaluation.is_match());
//! ```

use serde_json::Value;
use std::cell::RefCell;

use crate::errors::{PartialChangeError, Result};
use crate::log_op_error;
use crate::matcher::expectation::{evaluate, Evaluation};
use crate::model::PathSet;
use crate::schema::OP_EVALUATE_NEGATED;
use crate::snapshot::{ensure_structure, Observable, Snapshot};

/// Build a matcher declaring exactly which paths must change
pub fn partial_change(paths: impl Into<PathSet>) -> PartialChange {
    PartialChange::new(paths)
}

/// Matcher asserting that a block changes exactly the declared paths
#[derive(Debug, Clone, PartialEq)]
pub struct PartialChange {
    declared: PathSet,
    from: Option<Value>,
    to: Option<Value>,
}

impl PartialChange {
    pub fn new(paths: impl Into<PathSet>) -> Self {
        Self {
            declared: paths.into(),
            from: None,
            to: None,
        }
    }

    /// Require the target to hold `expected`'s leaf values before the block runs
    pub fn from(mut self, expected: Value) -> Self {
        self.from = Some(expected);
        self
    }

    /// Require the target to hold `expected`'s leaf values after the block runs
    pub fn to(mut self, expected: Value) -> Self {
        self.to = Some(expected);
        self
    }

    pub fn declared(&self) -> &PathSet {
        &self.declared
    }

    pub fn expected_from(&self) -> Option<&Value> {
        self.from.as_ref()
    }

    pub fn expected_to(&self) -> Option<&Value> {
        self.to.as_ref()
    }

    /// Run `block` against `target` once and evaluate the change.
    ///
    /// Returns the [`Evaluation`] whatever the verdict; check
    /// [`Evaluation::is_match`].
    ///
    /// # Errors
    /// * `NotAStructure` - If the target or a partial expectation is not a map
    /// * `Serialization` - If the target cannot be observed
    pub fn evaluate<T, F>(&self, target: &mut T, block: F) -> Result<Evaluation>
    where
        T: Observable + ?Sized,
        F: FnOnce(&mut T),
    {
        self.try_evaluate(target, |t| {
            block(t);
            Ok::<(), PartialChangeError>(())
        })
    }

    /// Run a fallible `block` against `target` once and evaluate the change.
    ///
    /// An error from `block` is returned unchanged and no after-snapshot is
    /// taken. Matcher errors reach the caller through `E: From<PartialChangeError>`.
    ///
    /// # Errors
    /// * Whatever `block` returns
    /// * `NotAStructure` / `Serialization` - As for [`PartialChange::evaluate`]
    pub fn try_evaluate<T, F, E>(&self, target: &mut T, block: F) -> std::result::Result<Evaluation, E>
    where
        T: Observable + ?Sized,
        F: FnOnce(&mut T) -> std::result::Result<(), E>,
        E: From<PartialChangeError>,
    {
        self.validate()?;
        let before = Snapshot::observe(&*target)?;
        block(&mut *target)?;
        let after = Snapshot::observe(&*target)?;
        Ok(self.finish(before, after))
    }

    /// Evaluate around a zero-argument block that mutates a shared target.
    ///
    /// The target is only borrowed while a snapshot is taken, so `block` is
    /// free to borrow it mutably.
    ///
    /// # Errors
    /// * `NotAStructure` / `Serialization` - As for [`PartialChange::evaluate`]
    ///
    /// # Panics
    /// Panics if `block` still holds a borrow of `target` when it returns.
    pub fn evaluate_shared<T, F>(&self, target: &RefCell<T>, block: F) -> Result<Evaluation>
    where
        T: Observable + ?Sized,
        F: FnOnce(),
    {
        self.validate()?;
        let before = Snapshot::observe(&*target.borrow())?;
        block();
        let after = Snapshot::observe(&*target.borrow())?;
        Ok(self.finish(before, after))
    }

    /// Negated form. Always fails with `NegatedUsage`; `block` never runs.
    ///
    /// # Errors
    /// * `NegatedUsage` - Always
    pub fn evaluate_negated<T, F>(&self, _target: &mut T, _block: F) -> Result<Evaluation>
    where
        T: Observable + ?Sized,
        F: FnOnce(&mut T),
    {
        let err = PartialChangeError::NegatedUsage;
        log_op_error!(OP_EVALUATE_NEGATED, err.clone(), duration_ms = 0u64);
        Err(err)
    }

    fn validate(&self) -> Result<()> {
        if let Some(from) = &self.from {
            ensure_structure(from, "from expectation")?;
        }
        if let Some(to) = &self.to {
            ensure_structure(to, "to expectation")?;
        }
        Ok(())
    }

    fn finish(&self, before: Snapshot, after: Snapshot) -> Evaluation {
        evaluate(
            before,
            after,
            &self.declared,
            self.from.as_ref(),
            self.to.as_ref(),
        )
    }
}
