//! Error types for graph construction, guest-list checks and planning.

use crate::edges::DislikeEdge;
use crate::person::Person;
use thiserror::Error;

/// Errors raised while building a [`DislikeGraph`](crate::graph::DislikeGraph).
///
/// Every variant names the offending person so the caller can fix the input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The same person appears twice as a key.
    #[error("person {person} is listed more than once")]
    DuplicatePerson {
        /// The repeated person.
        person: Person,
    },
    /// A person lists themself as disliked.
    #[error("person {person} dislikes themself")]
    SelfDislike {
        /// The offending person.
        person: Person,
    },
    /// A dislike list names someone who is not in the graph.
    #[error("{person} dislikes {disliked}, who is not in the graph")]
    UnknownPerson {
        /// Owner of the dislike list.
        person: Person,
        /// The missing target.
        disliked: Person,
    },
    /// `A` dislikes `B` but `B` does not dislike `A`.
    #[error("{person} dislikes {disliked}, but {disliked} does not dislike {person}")]
    Asymmetric {
        /// Owner of the one-sided entry.
        person: Person,
        /// Target that does not reciprocate.
        disliked: Person,
    },
    /// The same target appears twice in one dislike list.
    #[error("{person} lists {disliked} more than once")]
    DuplicateDislike {
        /// Owner of the dislike list.
        person: Person,
        /// The repeated target.
        disliked: Person,
    },
    /// The graph does not fit a `u64` subset mask.
    #[error("graph has {count} people; at most 64 are supported")]
    TooManyPeople {
        /// Number of people requested.
        count: usize,
    },
}

/// Reasons a concrete guest list is not acceptable for a graph.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InviteError {
    /// Two invited guests dislike each other.
    #[error("guests {edge} dislike each other")]
    Conflict {
        /// The violated dislike edge.
        edge: DislikeEdge,
    },
    /// A guest is not a person of the graph.
    #[error("guest {guest} is not in the graph")]
    UnknownGuest {
        /// The unknown guest.
        guest: Person,
    },
    /// A guest appears more than once.
    #[error("guest {guest} is invited more than once")]
    DuplicateGuest {
        /// The repeated guest.
        guest: Person,
    },
}

/// Errors raised by the dinner planner.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The subset space is larger than the configured limit for this strategy.
    #[error("{people} people to search exceeds the {limit}-person limit of the {strategy} strategy")]
    SearchSpaceTooLarge {
        /// Strategy that refused the problem.
        strategy: &'static str,
        /// Number of people that would be enumerated.
        people: usize,
        /// Configured limit.
        limit: usize,
    },
    /// The configured deadline elapsed before enumeration finished.
    #[error("deadline exceeded after examining {examined} candidate guest lists")]
    DeadlineExceeded {
        /// Masks visited before giving up.
        examined: u64,
    },
}
