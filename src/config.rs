//! Planner limits.

use std::time::Duration;

/// Search limits for [`DinnerPlanner`](crate::planner::DinnerPlanner).
///
/// The search is exponential in the number of people it enumerates, so each strategy refuses
/// problems above a size limit instead of running for hours or exhausting memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Largest number of people the exhaustive and prefiltered strategies will enumerate.
    /// Both hold all `2^n` subsets in memory at once.
    pub max_materialized_people: usize,
    /// Largest number of people the integrated strategy will enumerate.
    pub max_streamed_people: usize,
    /// Optional wall-clock budget for the integrated strategy.
    pub deadline: Option<Duration>,
    /// How many masks the integrated strategy visits between deadline checks.
    pub deadline_check_every: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_materialized_people: 20,
            max_streamed_people: 40,
            deadline: None,
            deadline_check_every: 4_096,
        }
    }
}

impl PlannerConfig {
    /// Returns a config with no size limits beyond the 64-person graph cap.
    pub fn unbounded() -> Self {
        Self {
            max_materialized_people: crate::graph::MAX_PEOPLE,
            max_streamed_people: crate::graph::MAX_PEOPLE,
            ..Self::default()
        }
    }

    /// Sets the wall-clock budget for the integrated strategy.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}
