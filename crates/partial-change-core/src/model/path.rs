use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{PartialChangeError, Result};

/// Path - a location inside a nested structure
///
/// A Path is the ordered sequence of keys followed when descending through
/// nested maps, e.g. `["user", "address", "city"]`. Paths are never empty.
/// Ordering is lexicographic over the key sequence, so every extension of a
/// path sorts after it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Path(Vec<String>);

impl Path {
    /// Create a Path from a sequence of keys
    ///
    /// # Errors
    /// * `EmptyPath` - If `keys` yields no key
    pub fn new<I, K>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        if keys.is_empty() {
            return Err(PartialChangeError::EmptyPath);
        }
        Ok(Self(keys))
    }

    /// Create a Path from a first key and any number of following keys
    ///
    /// Infallible because the first key is always present. Backs the
    /// [`path!`](crate::path) macro.
    pub fn from_parts(first: impl Into<String>, rest: Vec<String>) -> Self {
        let mut keys = Vec::with_capacity(rest.len() + 1);
        keys.push(first.into());
        keys.extend(rest);
        Self(keys)
    }

    /// Keys of this path, outermost first
    pub fn keys(&self) -> &[String] {
        &self.0
    }

    /// Number of keys (depth of the location)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: paths hold at least one key
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if `self` equals `other` or is an ancestor of it
    pub fn is_prefix_of(&self, other: &Path) -> bool {
        other.0.starts_with(&self.0)
    }

    /// True if `other` extends `self` by at least one key
    pub fn is_strict_prefix_of(&self, other: &Path) -> bool {
        self.0.len() < other.0.len() && self.is_prefix_of(other)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// Parses the dot-joined form, e.g. `"user.address.city"`.
///
/// Keys that themselves contain `.` must be built with [`Path::new`].
impl FromStr for Path {
    type Err = PartialChangeError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(PartialChangeError::EmptyPath);
        }
        Path::new(s.split('.'))
    }
}

impl TryFrom<Vec<String>> for Path {
    type Error = PartialChangeError;

    fn try_from(keys: Vec<String>) -> Result<Self> {
        Path::new(keys)
    }
}

impl From<Path> for Vec<String> {
    fn from(path: Path) -> Self {
        path.0
    }
}

/// Build a [`Path`] from one or more keys
///
/// ```
/// use partial_change_core::path;
///
/// let city = path!("user", "address", "city");
/// assert_eq!(city.to_string(), "user.address.city");
/// ```
#[macro_export]
macro_rules! path {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::model::Path::from_parts(
            $first,
            ::std::vec![$(::std::string::String::from($rest)),*],
        )
    };
}
