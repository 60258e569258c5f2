//! Snapshot capture.
//!
//! A [`Snapshot`] is an immutable, fully independent copy of a structure taken
//! at one instant, together with its digest.
//!
//! ## Responsibilities
//!
//! - Deep-copy the live structure (explicit structural copy, see [`clone`])
//! - Reject targets whose root is not a map
//! - Resolve values at paths for the diff and expectation checks
//!
//! ## Constraints
//!
//! The supported value kinds are exactly the `serde_json::Value` variants.
//! Typed targets reach this set through serde ([`structure_of`]); a value
//! serde_json cannot represent (for example a map with non-string keys) is
//! reported as `PartialChangeError::Serialization` rather than copied lossily.
//!
//! Capturing, digesting, comparing, cloning and dropping a snapshot all run
//! on explicit work stacks, so nesting depth is bounded by memory. Serde
//! conversion of typed targets and the `Debug`/`Serialize` output of a
//! snapshot still recurse per level.

pub mod clone;
pub mod digest;

pub use clone::{deep_copy, deep_copy_map, deep_equal, release, value_kind};
pub use digest::compute_structure_digest;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::diff::leaf_paths::leaf_paths;
use crate::diff::resolver::resolve;
use crate::errors::{PartialChangeError, Result};
use crate::model::{Path, PathSet};

/// A value that can be observed by the matcher
///
/// `structure` returns an independent copy of the current state as a
/// structure. Implement it for typed records with [`structure_of`].
pub trait Observable {
    /// Independent structure view of the current state
    ///
    /// # Errors
    /// * `Serialization` - If the state cannot be represented as a structure
    fn structure(&self) -> Result<Value>;
}

impl Observable for Value {
    fn structure(&self) -> Result<Value> {
        Ok(deep_copy(self))
    }
}

impl Observable for Map<String, Value> {
    fn structure(&self) -> Result<Value> {
        Ok(Value::Object(deep_copy_map(self)))
    }
}

/// Convert any serializable value into a structure
///
/// # Errors
/// * `Serialization` - If serde_json rejects the value
///
/// # Example
///
/// ```
/// use partial_change_core::errors::Result;
/// use partial_change_core::snapshot::{structure_of, Observable};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Account {
///     owner: String,
///     balance: i64,
/// }
///
/// impl Observable for Account {
///     fn structure(&self) -> Result<serde_json::Value> {
///         structure_of(self)
///     }
/// }
/// ```
pub fn structure_of<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Fail unless `value` is a map at its root
pub(crate) fn ensure_structure(value: &Value, role: &str) -> Result<()> {
    if value.is_object() {
        Ok(())
    } else {
        Err(PartialChangeError::NotAStructure {
            role: role.to_string(),
            found: value_kind(value).to_string(),
        })
    }
}

/// Immutable deep copy of a structure at one instant
#[derive(Debug, Serialize)]
pub struct Snapshot {
    root: Value,
    digest: String,
}

impl Snapshot {
    /// Capture a snapshot of a raw structure
    ///
    /// # Errors
    /// * `NotAStructure` - If the root is not a map
    pub fn capture(structure: &Value) -> Result<Self> {
        ensure_structure(structure, "target")?;
        Ok(Self::from_owned(deep_copy(structure)))
    }

    /// Capture a snapshot of any observable target
    ///
    /// # Errors
    /// * `Serialization` - If the target cannot be represented as a structure
    /// * `NotAStructure` - If its structure is not a map at the root
    pub fn observe<T: Observable + ?Sized>(target: &T) -> Result<Self> {
        let structure = target.structure()?;
        ensure_structure(&structure, "target")?;
        Ok(Self::from_owned(structure))
    }

    fn from_owned(root: Value) -> Self {
        let digest = compute_structure_digest(&root);
        Self { root, digest }
    }

    /// The captured structure
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Value at `path`, or `None` if any key along it is absent
    pub fn get(&self, path: &Path) -> Option<&Value> {
        resolve(&self.root, path)
    }

    /// Hex SHA256 digest of the captured structure
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Leaf paths of the captured structure
    pub fn leaf_paths(&self) -> PathSet {
        leaf_paths(&self.root)
    }
}

impl Clone for Snapshot {
    fn clone(&self) -> Self {
        Self {
            root: deep_copy(&self.root),
            digest: self.digest.clone(),
        }
    }
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.digest == other.digest && deep_equal(&self.root, &other.root)
    }
}

impl Drop for Snapshot {
    fn drop(&mut self) {
        release(std::mem::take(&mut self.root));
    }
}
