//! Session variables passed back to Alfred.
//!
//! Variables ride alongside the result list and become workflow environment
//! state once the user actions a result. The map is string-to-string only,
//! which is what keeps serialization infallible.
//!
//! Backed by [`IndexMap`] so a given construction sequence always produces
//! the same output bytes. Insertion order carries no meaning for Alfred;
//! last write wins on duplicate keys.

use indexmap::IndexMap;
use serde::Serialize;

/// An ordered set of string variables.
///
/// Attached at the document level via
/// [`ScriptFilter::variables_mut`](crate::ScriptFilter::variables_mut) and
/// independently to each [`Modifier`](crate::Modifier). Empty maps are
/// omitted from output entirely.
///
/// # Examples
///
/// ```rust
/// use alfred_script_filter::Variables;
///
/// let mut vars = Variables::new();
/// vars.put("key", "value");
/// vars.put("key", "value2");
/// assert_eq!(vars.len(), 1);
/// assert_eq!(vars.get("key"), Some("value2"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Variables(IndexMap<String, String>);

impl Variables {
    /// Creates an empty variable set.
    #[must_use]
    pub fn new() -> Self {
        Variables(IndexMap::new())
    }

    /// Inserts or overwrites a variable.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Reports whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Variables
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Variables(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V> Extend<(K, V)> for Variables
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl From<IndexMap<String, String>> for Variables {
    fn from(map: IndexMap<String, String>) -> Self {
        Variables(map)
    }
}
