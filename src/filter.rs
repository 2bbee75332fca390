//! Separates people with no dislikes ("free invites") from the part of the graph that needs
//! searching.

use crate::graph::DislikeGraph;
use crate::person::{GuestList, Person};
use tracing::debug;

/// Partitions `graph` into free invites and the residual graph.
///
/// Free invites are returned in the graph's insertion order. The residual graph keeps the
/// remaining people in their original order with their adjacency lists copied verbatim; lists are
/// not pruned against the residual people. In a symmetric graph no list can name a free invite,
/// so nothing is lost.
///
/// Dropping free invites never changes the size of a maximum guest list, only the number of
/// people the search has to enumerate.
pub fn filter_no_dislikes(graph: &DislikeGraph) -> (GuestList, DislikeGraph) {
    let (free, residual): (Vec<_>, Vec<_>) = graph
        .iter()
        .map(|(person, dislikes)| (person.clone(), dislikes.to_vec()))
        .partition(|(_, dislikes)| dislikes.is_empty());

    let free: GuestList = free.into_iter().map(|(person, _)| person).collect();
    let residual = DislikeGraph::from_entries_unchecked(residual);

    debug!(
        free = free.len(),
        residual = residual.len(),
        "filtered people without dislikes"
    );
    (free, residual)
}

/// Returns whether `person` has no recorded dislikes in `graph`.
///
/// People not in the graph are not free invites.
pub fn is_free_invite(graph: &DislikeGraph, person: &Person) -> bool {
    graph
        .dislikes_of(person.as_str())
        .is_some_and(<[Person]>::is_empty)
}
