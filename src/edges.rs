//! Canonical dislike edges.
//!
//! An edge is an unordered pair stored as `(min, max)` by label, so the two directions of a
//! symmetric adjacency entry collapse to one value.

use crate::graph::DislikeGraph;
use crate::person::Person;
use std::collections::BTreeSet;
use std::fmt;

/// An unordered pair of distinct people who dislike each other.
///
/// Invariant: `first() <= second()` lexicographically.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DislikeEdge(Person, Person);

impl DislikeEdge {
    /// Creates the canonical edge between `a` and `b`, in either order.
    pub fn new(a: impl Into<Person>, b: impl Into<Person>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    /// The lexicographically smaller endpoint.
    #[inline]
    pub fn first(&self) -> &Person {
        &self.0
    }

    /// The lexicographically larger endpoint.
    #[inline]
    pub fn second(&self) -> &Person {
        &self.1
    }

    /// Both endpoints, smaller first.
    #[inline]
    pub fn as_pair(&self) -> (&Person, &Person) {
        (&self.0, &self.1)
    }

    /// Returns whether `person` is one of the endpoints.
    pub fn touches(&self, person: &str) -> bool {
        self.0 == *person || self.1 == *person
    }
}

impl fmt::Display for DislikeEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl<A: Into<Person>, B: Into<Person>> From<(A, B)> for DislikeEdge {
    fn from((a, b): (A, B)) -> Self {
        Self::new(a, b)
    }
}

/// Returns every dislike edge of `graph`, each unordered pair exactly once.
///
/// A person with an empty dislike list contributes nothing. A fresh set is built on every call.
pub fn find_dislikes(graph: &DislikeGraph) -> BTreeSet<DislikeEdge> {
    let mut edges = BTreeSet::new();
    for (person, dislikes) in graph.iter() {
        for disliked in dislikes {
            edges.insert(DislikeEdge::new(person.clone(), disliked.clone()));
        }
    }
    edges
}
