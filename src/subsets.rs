//! Bitmask subset enumeration.
//!
//! Subset `i` of a list of `n` people contains the person at position `j` iff bit `n - 1 - j` of
//! `i` is set (see [`position_bit`]). Masks are walked in increasing order, so the empty list comes
//! first and the full list last. Members are always listed in input order.

use crate::graph::{all_bits, position_bit};
use crate::person::{GuestList, Person};
use std::iter::FusedIterator;
use std::ops::RangeInclusive;
use tracing::debug;

/// Returns every subset mask of `n` people in increasing order.
#[inline]
pub fn masks(n: usize) -> RangeInclusive<u64> {
    0..=all_bits(n)
}

/// Returns the number of subsets of `n` people, `2^n`.
#[inline]
pub fn subset_count(n: usize) -> u128 {
    1u128 << n
}

/// Decodes `mask` into the people it selects, in list order.
pub fn subset_from_mask(people: &[Person], mask: u64) -> GuestList {
    let n = people.len();
    people
        .iter()
        .enumerate()
        .filter(|&(pos, _)| mask & position_bit(n, pos) != 0)
        .map(|(_, person)| person.clone())
        .collect()
}

/// Lazy iterator over all subsets of a list of people, in increasing mask order.
///
/// Only one subset is alive at a time; use [`generate_all_subsets`] to materialise them.
#[derive(Clone, Debug)]
pub struct Subsets<'a> {
    people: &'a [Person],
    masks: RangeInclusive<u64>,
}

impl<'a> Subsets<'a> {
    /// Creates the iterator over all `2^n` subsets of `people`.
    pub fn new(people: &'a [Person]) -> Self {
        debug_assert!(people.len() <= 64, "subset masks hold at most 64 people");
        Self {
            people,
            masks: masks(people.len()),
        }
    }
}

impl Iterator for Subsets<'_> {
    type Item = GuestList;

    fn next(&mut self) -> Option<GuestList> {
        self.masks
            .next()
            .map(|mask| subset_from_mask(self.people, mask))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.masks.size_hint()
    }
}

impl FusedIterator for Subsets<'_> {}

/// Returns all `2^n` subsets of `people` in increasing mask order.
///
/// Costs `O(2^n * n)` time and memory; prefer [`Subsets`] when the list does not need to be kept.
pub fn generate_all_subsets(people: &[Person]) -> Vec<GuestList> {
    let all: Vec<GuestList> = Subsets::new(people).collect();
    debug!(people = people.len(), subsets = all.len(), "generated all subsets");
    all
}
