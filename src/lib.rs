//! # Guest List
//!
//! Picks the largest dinner guest list such that no two guests dislike each other: a maximum
//! independent set of the dislike graph, found by subset search.
//!
//! This crate provides:
//! - A validated, insertion-ordered [`DislikeGraph`](graph::DislikeGraph) (at most 64 people).
//! - Canonical dislike edges, a free-invite filter, and a bitmask subset generator.
//! - A batch invite validator and a single guest-list checker.
//! - Three planner strategies that always agree on the size of the best list.
//!
//! ## Quick Start
//!
//! ```
//! use guestlist::prelude::*;
//!
//! let graph = DislikeGraph::new([
//!     ("Alice", vec!["Bob"]),
//!     ("Bob", vec!["Alice", "Eve"]),
//!     ("Cleo", vec![]),
//!     ("Don", vec![]),
//!     ("Eve", vec!["Bob"]),
//! ])
//! .expect("graph is symmetric");
//!
//! let guests = plan_integrated(&graph).expect("small graph");
//! assert_eq!(guests, vec!["Alice", "Cleo", "Don", "Eve"]);
//! assert!(check_guest_list(&graph, &guests).is_ok());
//! ```
//!
//! ## Choosing a Strategy
//!
//! ```
//! use guestlist::prelude::*;
//! use std::time::Duration;
//!
//! let mut graph = DislikeGraph::empty();
//! graph.add_dislike("Finn", "Ginny").unwrap();
//! graph.add_dislike("Finn", "Ivan").unwrap();
//! graph.add_person("Asa").unwrap();
//!
//! let planner = DinnerPlanner::new(PlannerConfig::default().with_deadline(Duration::from_secs(5)));
//! for strategy in Strategy::ALL {
//!     let outcome = planner.plan_with_stats(&graph, strategy).unwrap();
//!     assert_eq!(outcome.guests.len(), 3);
//! }
//! assert_eq!(independence_number(&graph), 3);
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: Dislike graph construction and validation.
//! - [`edges`]: Canonical dislike edges.
//! - [`filter`]: Free-invite filter.
//! - [`subsets`]: Bitmask subset enumeration.
//! - [`invite`]: Guest-list validation.
//! - [`planner`]: The three search strategies.
//!
//! ## Performance Notes
//!
//! - Every strategy is exponential in the number of people it enumerates; the exhaustive ones also
//!   hold all `2^n` subsets in memory. [`PlannerConfig`](config::PlannerConfig) caps both.
//! - [`planner::independence_number`] uses branch-and-bound and scales much further.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::inline_always)]

pub mod config;
pub mod edges;
pub mod error;
pub mod filter;
pub mod graph;
pub mod invite;
pub mod person;
pub mod planner;
pub mod subsets;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::config::PlannerConfig;
    pub use crate::edges::{find_dislikes, DislikeEdge};
    pub use crate::error::{GraphError, InviteError, PlanError};
    pub use crate::filter::filter_no_dislikes;
    pub use crate::graph::DislikeGraph;
    pub use crate::invite::{check_guest_list, filter_bad_invites, is_valid_invite};
    pub use crate::person::{guest_list, GuestList, Person};
    pub use crate::planner::{
        independence_number, plan_exhaustive, plan_integrated, plan_prefiltered, DinnerPlanner,
        PlanOutcome, Strategy,
    };
    pub use crate::subsets::{generate_all_subsets, Subsets};
}
