//! Person labels and guest lists.

use std::borrow::Borrow;
use std::fmt;

/// An opaque person label, unique within a graph.
///
/// Ordering is lexicographic on the label, which is what edge canonicalization relies on.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Person(String);

/// A candidate or final set of invited people, in a deterministic order.
pub type GuestList = Vec<Person>;

impl Person {
    /// Creates a person from any string-like label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the person and returns the label.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Person {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}

impl From<String> for Person {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl Borrow<str> for Person {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Person {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Person {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Person {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Builds a guest list from string labels.
pub fn guest_list<I, S>(labels: I) -> GuestList
where
    I: IntoIterator<Item = S>,
    S: Into<Person>,
{
    labels.into_iter().map(Into::into).collect()
}
