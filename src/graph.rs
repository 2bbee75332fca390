//! Dislike graph: an insertion-ordered adjacency list of people (currently \(n \le 64\)).
//!
//! The graph is validated once, at construction. Everything downstream (edge extraction,
//! filtering, subset search) trusts it to be symmetric, loop-free and closed over its people.

use crate::error::GraphError;
use crate::person::Person;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Largest number of people a graph may hold; every subset must fit a `u64` mask.
pub const MAX_PEOPLE: usize = 64;

// ============================================================================
// Bitmask helpers
// ============================================================================

/// Returns a mask with the lowest `n` bits set.
#[inline(always)]
pub const fn all_bits(n: usize) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

/// Returns the mask bit of position `pos` in a list of `n` people.
///
/// The least-significant bit is the *last* person, so counting masks upward walks subsets in the
/// same order as reading binary numbers left to right over the list.
#[inline(always)]
pub const fn position_bit(n: usize, pos: usize) -> u64 {
    1u64 << (n - 1 - pos)
}

// ============================================================================
// DislikeGraph
// ============================================================================

/// Mapping from each person to the people they dislike.
///
/// Representation:
/// - `entries` keeps people in insertion order together with their dislike lists.
/// - `index` maps a person back to their position in `entries`.
///
/// Graphs built through [`DislikeGraph::new`], [`DislikeGraph::from_symmetric_closure`] or the
/// `add_*` builders are symmetric. The only exception is the residual graph produced by
/// [`filter_no_dislikes`](crate::filter::filter_no_dislikes), whose adjacency lists are kept
/// verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DislikeGraph {
    entries: Vec<(Person, Vec<Person>)>,
    index: HashMap<Person, usize>,
}

impl DislikeGraph {
    /// Creates a graph with no people.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a graph from `(person, dislikes)` entries, rejecting malformed input.
    ///
    /// # Errors
    /// Returns the first problem found: a repeated person, too many people, a self-dislike,
    /// a repeated dislike, a dislike of someone not in the graph, or a one-sided dislike.
    pub fn new<I, P, D, Q>(entries: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (P, D)>,
        P: Into<Person>,
        D: IntoIterator<Item = Q>,
        Q: Into<Person>,
    {
        let mut graph = Self::empty();
        for (person, dislikes) in entries {
            let person = person.into();
            if graph.index.contains_key(&person) {
                return Err(GraphError::DuplicatePerson { person });
            }
            graph.push_entry(person, dislikes.into_iter().map(Into::into).collect());
        }

        if graph.len() > MAX_PEOPLE {
            return Err(GraphError::TooManyPeople { count: graph.len() });
        }
        graph.validate()?;

        debug!(
            people = graph.len(),
            edges = graph.edge_count(),
            "built dislike graph"
        );
        Ok(graph)
    }

    /// Builds a graph from entries, repairing missing people and one-sided dislikes.
    ///
    /// Unknown dislike targets are added as people (after the listed ones, in order of first
    /// mention) and every dislike is recorded in both directions. Repeated entries merge.
    ///
    /// # Errors
    /// Self-dislikes and graphs over [`MAX_PEOPLE`] are still rejected.
    pub fn from_symmetric_closure<I, P, D, Q>(entries: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (P, D)>,
        P: Into<Person>,
        D: IntoIterator<Item = Q>,
        Q: Into<Person>,
    {
        let entries: Vec<(Person, Vec<Person>)> = entries
            .into_iter()
            .map(|(p, d)| (p.into(), d.into_iter().map(Into::into).collect()))
            .collect();

        let mut graph = Self::empty();
        for (person, _) in &entries {
            graph.add_person(person.clone())?;
        }
        for (person, dislikes) in entries {
            for disliked in dislikes {
                graph.add_dislike(person.clone(), disliked)?;
            }
        }

        debug!(
            people = graph.len(),
            edges = graph.edge_count(),
            "built dislike graph from symmetric closure"
        );
        Ok(graph)
    }

    /// Generates a random graph of `n` people named `guest-00`, `guest-01`, ...
    ///
    /// Each unordered pair dislikes each other independently with probability `p`.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyPeople`] if `n > MAX_PEOPLE`.
    pub fn new_random<R: Rng>(rng: &mut R, n: usize, p: f64) -> Result<Self, GraphError> {
        if n > MAX_PEOPLE {
            return Err(GraphError::TooManyPeople { count: n });
        }
        let p = p.clamp(0.0, 1.0);

        let people: Vec<Person> = (0..n).map(|i| Person::new(format!("guest-{i:02}"))).collect();
        let mut lists: Vec<Vec<Person>> = vec![Vec::new(); n];
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.random_bool(p) {
                    lists[i].push(people[j].clone());
                    lists[j].push(people[i].clone());
                }
            }
        }

        let mut graph = Self::empty();
        for (person, dislikes) in people.into_iter().zip(lists) {
            graph.push_entry(person, dislikes);
        }
        Ok(graph)
    }

    /// Builds a graph from entries without any validation.
    pub(crate) fn from_entries_unchecked(entries: Vec<(Person, Vec<Person>)>) -> Self {
        let mut graph = Self::empty();
        for (person, dislikes) in entries {
            graph.push_entry(person, dislikes);
        }
        graph
    }

    /// Adds a person with no dislikes; returns `false` if they were already present.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyPeople`] if the graph is already full.
    pub fn add_person(&mut self, person: impl Into<Person>) -> Result<bool, GraphError> {
        let person = person.into();
        if self.index.contains_key(&person) {
            return Ok(false);
        }
        if self.len() >= MAX_PEOPLE {
            return Err(GraphError::TooManyPeople {
                count: self.len() + 1,
            });
        }
        self.push_entry(person, Vec::new());
        Ok(true)
    }

    /// Records that `a` and `b` dislike each other, adding either person if needed.
    ///
    /// Adding an existing dislike is a no-op.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfDislike`] if `a == b`, or [`GraphError::TooManyPeople`].
    pub fn add_dislike(
        &mut self,
        a: impl Into<Person>,
        b: impl Into<Person>,
    ) -> Result<(), GraphError> {
        let (a, b) = (a.into(), b.into());
        if a == b {
            return Err(GraphError::SelfDislike { person: a });
        }
        self.add_person(a.clone())?;
        self.add_person(b.clone())?;

        let ia = self.index[&a];
        let ib = self.index[&b];
        if !self.entries[ia].1.contains(&b) {
            self.entries[ia].1.push(b);
        }
        if !self.entries[ib].1.contains(&a) {
            self.entries[ib].1.push(a);
        }
        Ok(())
    }

    #[inline]
    fn push_entry(&mut self, person: Person, dislikes: Vec<Person>) {
        self.index.insert(person.clone(), self.entries.len());
        self.entries.push((person, dislikes));
    }

    fn validate(&self) -> Result<(), GraphError> {
        for (person, dislikes) in &self.entries {
            let mut seen = HashSet::with_capacity(dislikes.len());
            for disliked in dislikes {
                if disliked == person {
                    return Err(GraphError::SelfDislike {
                        person: person.clone(),
                    });
                }
                if !seen.insert(disliked) {
                    return Err(GraphError::DuplicateDislike {
                        person: person.clone(),
                        disliked: disliked.clone(),
                    });
                }
                let Some(back) = self.dislikes_of(disliked.as_str()) else {
                    return Err(GraphError::UnknownPerson {
                        person: person.clone(),
                        disliked: disliked.clone(),
                    });
                };
                if !back.contains(person) {
                    return Err(GraphError::Asymmetric {
                        person: person.clone(),
                        disliked: disliked.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the number of people.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the graph has no people.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether `person` is in the graph.
    #[inline]
    pub fn contains(&self, person: &str) -> bool {
        self.index.contains_key(person)
    }

    /// Returns the insertion position of `person`.
    #[inline]
    pub fn index_of(&self, person: &str) -> Option<usize> {
        self.index.get(person).copied()
    }

    /// Returns the people `person` dislikes, or `None` if they are not in the graph.
    pub fn dislikes_of(&self, person: &str) -> Option<&[Person]> {
        self.index_of(person).map(|i| self.entries[i].1.as_slice())
    }

    /// Iterates people in insertion order.
    pub fn people(&self) -> impl Iterator<Item = &Person> + '_ {
        self.entries.iter().map(|(p, _)| p)
    }

    /// Iterates `(person, dislikes)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Person, &[Person])> + '_ {
        self.entries.iter().map(|(p, d)| (p, d.as_slice()))
    }

    /// Returns the number of dislike edges, counting each unordered pair once.
    pub fn edge_count(&self) -> usize {
        crate::edges::find_dislikes(self).len()
    }

    /// Returns, for each person in insertion order, the mask of people they conflict with.
    ///
    /// Bits follow [`position_bit`]. Entries that point outside the graph are ignored, and a
    /// one-sided entry still marks both endpoints.
    pub fn conflict_masks(&self) -> Vec<u64> {
        let n = self.len();
        let mut masks = vec![0u64; n];
        for (i, (_, dislikes)) in self.entries.iter().enumerate() {
            for disliked in dislikes {
                if let Some(j) = self.index_of(disliked.as_str()) {
                    if i != j {
                        masks[i] |= position_bit(n, j);
                        masks[j] |= position_bit(n, i);
                    }
                }
            }
        }
        masks
    }
}

// ============================================================================
// Tests
// ============================================================================
