use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::path::Path;

/// PathSet - an unordered set of paths
///
/// Backed by a `BTreeSet` so iteration and serialization are deterministic.
/// Equality is set equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathSet(BTreeSet<Path>);

impl PathSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Insert a path, returning false if it was already present
    pub fn insert(&mut self, path: Path) -> bool {
        self.0.insert(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.0.contains(path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in path order
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.0.iter()
    }

    /// Paths in `self` but not in `other`
    pub fn difference(&self, other: &PathSet) -> PathSet {
        self.0.difference(&other.0).cloned().collect()
    }

    /// The member equal to `path` or an ancestor of it, if any
    pub fn covering(&self, path: &Path) -> Option<&Path> {
        self.0.iter().find(|member| member.is_prefix_of(path))
    }
}

impl FromIterator<Path> for PathSet {
    fn from_iter<I: IntoIterator<Item = Path>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Path> for PathSet {
    fn extend<I: IntoIterator<Item = Path>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<const N: usize> From<[Path; N]> for PathSet {
    fn from(paths: [Path; N]) -> Self {
        paths.into_iter().collect()
    }
}

impl From<Vec<Path>> for PathSet {
    fn from(paths: Vec<Path>) -> Self {
        paths.into_iter().collect()
    }
}

impl IntoIterator for PathSet {
    type Item = Path;
    type IntoIter = std::collections::btree_set::IntoIter<Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item = &'a Path;
    type IntoIter = std::collections::btree_set::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Renders as `{a, user.address.city}`.
impl fmt::Display for PathSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.0.iter().map(|p| p.to_string()).collect();
        write!(f, "{{{}}}", joined.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;

    #[test]
    fn test_set_equality_ignores_insertion_order() {
        let a: PathSet = PathSet::from([path!("b"), path!("a")]);
        let b: PathSet = PathSet::from([path!("a"), path!("b")]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_difference() {
        let declared: PathSet = PathSet::from([path!("a"), path!("b")]);
        let changed: PathSet = PathSet::from([path!("b"), path!("c")]);

        assert_eq!(declared.difference(&changed), PathSet::from([path!("a")]));
        assert_eq!(changed.difference(&declared), PathSet::from([path!("c")]));
        assert!(declared.difference(&declared).is_empty());
    }

    #[test]
    fn test_covering_finds_ancestor() {
        let declared: PathSet = PathSet::from([path!("user", "address")]);
        let city = path!("user", "address", "city");

        assert_eq!(declared.covering(&city), Some(&path!("user", "address")));
        assert_eq!(declared.covering(&path!("user", "name")), None);
    }

    #[test]
    fn test_display() {
        let set: PathSet = PathSet::from([path!("user", "name"), path!("a")]);
        assert_eq!(set.to_string(), "{a, user.name}");
    }
}
