//! Dinner planner: finds a largest guest list with no two guests who dislike each other.
//!
//! Three strategies share one contract and always agree on the *size* of the list:
//! - [`Strategy::Exhaustive`] materialises every subset, filters, and keeps the longest.
//! - [`Strategy::Prefiltered`] drops free invites first, searches the rest, and appends them.
//! - [`Strategy::Integrated`] walks the subset masks once, checking each candidate as it is
//!   built and keeping only the best so far.
//!
//! Ties go to the first maximum-size list in increasing mask order.

use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::filter::filter_no_dislikes;
use crate::graph::{position_bit, DislikeGraph};
use crate::invite::filter_bad_invites;
use crate::person::{GuestList, Person};
use crate::subsets::{generate_all_subsets, masks, subset_from_mask};
use std::fmt;
use std::time::Instant;
use tracing::{debug, trace};

// ============================================================================
// Strategy
// ============================================================================

/// Search strategy used by [`DinnerPlanner`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Enumerate all subsets, validate them in one batch, keep the longest.
    Exhaustive,
    /// Remove free invites, run the exhaustive search on the rest, then add them back.
    Prefiltered,
    /// Enumerate masks and validate each one immediately, holding one candidate at a time.
    Integrated,
}

impl Strategy {
    /// All strategies, cheapest-to-read first.
    pub const ALL: [Strategy; 3] = [Strategy::Exhaustive, Strategy::Prefiltered, Strategy::Integrated];

    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Exhaustive => "exhaustive",
            Strategy::Prefiltered => "prefiltered",
            Strategy::Integrated => "integrated",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// A planned guest list together with search statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanOutcome {
    /// The chosen guest list.
    pub guests: GuestList,
    /// Strategy that produced it.
    pub strategy: Strategy,
    /// Number of people the subset search enumerated over.
    pub searched_people: usize,
    /// People added without search because they dislike nobody.
    pub free_invites: usize,
    /// Candidate subsets enumerated.
    pub examined: u64,
    /// Candidate subsets actually checked against the dislike edges.
    pub validated: u64,
}

// ============================================================================
// DinnerPlanner
// ============================================================================

/// Runs guest-list searches under a [`PlannerConfig`].
#[derive(Clone, Debug, Default)]
pub struct DinnerPlanner {
    config: PlannerConfig,
}

impl DinnerPlanner {
    /// Creates a planner with the given limits.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Returns the planner's limits.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Returns a largest valid guest list for `graph`.
    ///
    /// # Errors
    /// See [`DinnerPlanner::plan_with_stats`].
    pub fn plan(&self, graph: &DislikeGraph, strategy: Strategy) -> Result<GuestList, PlanError> {
        self.plan_with_stats(graph, strategy).map(|outcome| outcome.guests)
    }

    /// Returns a largest valid guest list for `graph` with search statistics.
    ///
    /// # Errors
    /// Returns [`PlanError::SearchSpaceTooLarge`] if the strategy would enumerate more people
    /// than the config allows, or [`PlanError::DeadlineExceeded`] if the integrated search runs
    /// out of time.
    pub fn plan_with_stats(
        &self,
        graph: &DislikeGraph,
        strategy: Strategy,
    ) -> Result<PlanOutcome, PlanError> {
        let outcome = match strategy {
            Strategy::Exhaustive => self.exhaustive(graph, strategy)?,
            Strategy::Prefiltered => self.prefiltered(graph)?,
            Strategy::Integrated => self.integrated(graph)?,
        };

        debug!(
            strategy = %outcome.strategy,
            people = graph.len(),
            searched = outcome.searched_people,
            free = outcome.free_invites,
            examined = outcome.examined,
            validated = outcome.validated,
            guests = outcome.guests.len(),
            "planned dinner"
        );
        Ok(outcome)
    }

    fn exhaustive(&self, graph: &DislikeGraph, strategy: Strategy) -> Result<PlanOutcome, PlanError> {
        let people: Vec<Person> = graph.people().cloned().collect();
        check_size(strategy, people.len(), self.config.max_materialized_people)?;

        let all = generate_all_subsets(&people);
        let examined = all.len() as u64;
        let good = filter_bad_invites(all, graph);

        Ok(PlanOutcome {
            guests: longest_first(good),
            strategy,
            searched_people: people.len(),
            free_invites: 0,
            examined,
            validated: examined,
        })
    }

    fn prefiltered(&self, graph: &DislikeGraph) -> Result<PlanOutcome, PlanError> {
        let (free, residual) = filter_no_dislikes(graph);
        let mut outcome = self.exhaustive(&residual, Strategy::Prefiltered)?;
        outcome.free_invites = free.len();
        outcome.guests.extend(free);
        Ok(outcome)
    }

    fn integrated(&self, graph: &DislikeGraph) -> Result<PlanOutcome, PlanError> {
        let people: Vec<Person> = graph.people().cloned().collect();
        let n = people.len();
        check_size(Strategy::Integrated, n, self.config.max_streamed_people)?;

        let conflicts = conflicts_by_bit(graph);
        let check_every = self.config.deadline_check_every.max(1);
        let started = Instant::now();

        let mut best_mask = 0u64;
        let mut best_len = 0usize;
        let mut examined = 0u64;
        let mut validated = 0u64;

        for mask in masks(n) {
            if let Some(deadline) = self.config.deadline {
                if examined % check_every == 0 && started.elapsed() >= deadline {
                    return Err(PlanError::DeadlineExceeded { examined });
                }
            }
            examined += 1;

            // Only a strictly longer list can replace the best, so shorter ones need no check.
            let len = mask.count_ones() as usize;
            if len <= best_len && mask != 0 {
                continue;
            }
            validated += 1;
            if is_independent(&conflicts, mask) && len > best_len {
                trace!(mask, len, "found a longer guest list");
                best_mask = mask;
                best_len = len;
            }
        }

        Ok(PlanOutcome {
            guests: subset_from_mask(&people, best_mask),
            strategy: Strategy::Integrated,
            searched_people: n,
            free_invites: 0,
            examined,
            validated,
        })
    }
}

// ============================================================================
// Convenience entry points (default limits)
// ============================================================================

/// Exhaustive search: every subset is generated, validated, and the longest kept.
///
/// # Errors
/// See [`DinnerPlanner::plan_with_stats`].
pub fn plan_exhaustive(graph: &DislikeGraph) -> Result<GuestList, PlanError> {
    DinnerPlanner::default().plan(graph, Strategy::Exhaustive)
}

/// Exhaustive search on the people who have dislikes, followed by the free invites.
///
/// # Errors
/// See [`DinnerPlanner::plan_with_stats`].
pub fn plan_prefiltered(graph: &DislikeGraph) -> Result<GuestList, PlanError> {
    DinnerPlanner::default().plan(graph, Strategy::Prefiltered)
}

/// Single-pass search that never stores more than one candidate subset.
///
/// # Errors
/// See [`DinnerPlanner::plan_with_stats`].
pub fn plan_integrated(graph: &DislikeGraph) -> Result<GuestList, PlanError> {
    DinnerPlanner::default().plan(graph, Strategy::Integrated)
}

/// Returns the size of a largest valid guest list (the independence number of the graph).
///
/// Branch-and-bound over bitmasks; much faster than any of the enumerating strategies and
/// independent of them, which makes it a useful cross-check.
pub fn independence_number(graph: &DislikeGraph) -> usize {
    let conflicts = conflicts_by_bit(graph);
    let mut best = 0usize;
    max_independent(&conflicts, crate::graph::all_bits(graph.len()), 0, &mut best);
    best
}

// ============================================================================
// Internal
// ============================================================================

fn check_size(strategy: Strategy, people: usize, limit: usize) -> Result<(), PlanError> {
    if people > limit {
        return Err(PlanError::SearchSpaceTooLarge {
            strategy: strategy.name(),
            people,
            limit,
        });
    }
    Ok(())
}

/// Returns the first longest list; later lists of equal length do not replace it.
fn longest_first(candidates: Vec<GuestList>) -> GuestList {
    let mut best = GuestList::new();
    for candidate in candidates {
        if candidate.len() > best.len() {
            best = candidate;
        }
    }
    best
}

/// Conflict masks re-indexed by mask bit instead of list position.
fn conflicts_by_bit(graph: &DislikeGraph) -> Vec<u64> {
    let n = graph.len();
    let by_pos = graph.conflict_masks();
    let mut by_bit = vec![0u64; n];
    for (pos, &mask) in by_pos.iter().enumerate() {
        by_bit[position_bit(n, pos).trailing_zeros() as usize] = mask;
    }
    by_bit
}

#[inline]
fn is_independent(conflicts: &[u64], subset: u64) -> bool {
    let mut t = subset;
    while t != 0 {
        let b = t.trailing_zeros() as usize;
        t &= t - 1;
        if conflicts[b] & subset != 0 {
            return false;
        }
    }
    true
}

fn max_independent(conflicts: &[u64], candidates: u64, size: usize, best: &mut usize) {
    if candidates == 0 {
        if size > *best {
            *best = size;
        }
        return;
    }
    if size + candidates.count_ones() as usize <= *best {
        return;
    }

    let b = candidates.trailing_zeros() as usize;
    let v = 1u64 << b;
    max_independent(conflicts, candidates & !v & !conflicts[b], size + 1, best);
    // A vertex with no remaining conflicts is always worth taking.
    if conflicts[b] & candidates != 0 {
        max_independent(conflicts, candidates & !v, size, best);
    }
}

// ============================================================================
// Tests
// ============================================================================
