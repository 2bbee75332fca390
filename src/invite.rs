//! Invite validation: discarding guest lists that seat two people who dislike each other.

use crate::edges::{find_dislikes, DislikeEdge};
use crate::error::InviteError;
use crate::graph::DislikeGraph;
use crate::person::{GuestList, Person};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, trace};

/// Returns the first edge (in canonical order) whose endpoints are both in `candidate`.
pub fn first_conflict<'e>(
    candidate: &[Person],
    edges: &'e BTreeSet<DislikeEdge>,
) -> Option<&'e DislikeEdge> {
    if candidate.len() < 2 {
        return None;
    }
    let members: HashSet<&str> = candidate.iter().map(Person::as_str).collect();
    edges
        .iter()
        .find(|e| members.contains(e.first().as_str()) && members.contains(e.second().as_str()))
}

/// Returns `true` iff no dislike edge has both endpoints in `candidate`.
#[inline]
pub fn is_valid_invite(candidate: &[Person], edges: &BTreeSet<DislikeEdge>) -> bool {
    first_conflict(candidate, edges).is_none()
}

/// Keeps only the candidates that contain no dislike edge of `graph`.
///
/// The edge set is computed once. Survivors keep their input order and each input candidate
/// yields at most one output.
pub fn filter_bad_invites<I>(candidates: I, graph: &DislikeGraph) -> Vec<GuestList>
where
    I: IntoIterator<Item = GuestList>,
{
    let edges = find_dislikes(graph);
    let mut rejected = 0usize;
    let kept: Vec<GuestList> = candidates
        .into_iter()
        .filter(|candidate| {
            let ok = is_valid_invite(candidate, &edges);
            if !ok {
                rejected += 1;
            }
            ok
        })
        .collect();

    debug!(
        edges = edges.len(),
        kept = kept.len(),
        rejected,
        "filtered bad invites"
    );
    kept
}

/// Checks a concrete guest list against `graph`.
///
/// # Errors
/// Returns the first repeated guest, unknown guest, or conflicting pair found.
pub fn check_guest_list(graph: &DislikeGraph, guests: &[Person]) -> Result<(), InviteError> {
    let mut seen = HashSet::with_capacity(guests.len());
    for guest in guests {
        if !graph.contains(guest.as_str()) {
            return Err(InviteError::UnknownGuest {
                guest: guest.clone(),
            });
        }
        if !seen.insert(guest) {
            return Err(InviteError::DuplicateGuest {
                guest: guest.clone(),
            });
        }
    }

    let edges = find_dislikes(graph);
    if let Some(edge) = first_conflict(guests, &edges) {
        trace!(%edge, "guest list has a conflict");
        return Err(InviteError::Conflict { edge: edge.clone() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::guest_list;
    use crate::subsets::generate_all_subsets;

    fn pair_and_loner() -> DislikeGraph {
        DislikeGraph::new([("Alice", vec!["Bob"]), ("Bob", vec!["Alice"]), ("Eve", vec![])])
            .unwrap()
    }

    #[test]
    fn filter_bad_invites_drops_conflicting_subsets_in_order() {
        let graph = pair_and_loner();
        let people: Vec<Person> = graph.people().cloned().collect();
        let all = generate_all_subsets(&people);
        let kept = filter_bad_invites(all, &graph);

        let expected: Vec<GuestList> = vec![
            guest_list(Vec::<&str>::new()),
            guest_list(["Eve"]),
            guest_list(["Bob"]),
            guest_list(["Bob", "Eve"]),
            guest_list(["Alice"]),
            guest_list(["Alice", "Eve"]),
        ];
        assert_eq!(kept, expected);
    }

    #[test]
    fn filter_bad_invites_does_not_duplicate_candidates() {
        let graph = DislikeGraph::new([
            ("Alice", vec!["Bob"]),
            ("Bob", vec!["Alice", "Eve"]),
            ("Eve", vec!["Bob"]),
        ])
        .unwrap();
        // Violates both edges; must be dropped once, not twice.
        let candidates = vec![
            guest_list(["Alice", "Bob", "Eve"]),
            guest_list(["Alice", "Eve"]),
        ];
        let kept = filter_bad_invites(candidates, &graph);
        assert_eq!(kept, vec![guest_list(["Alice", "Eve"])]);
    }

    #[test]
    fn filter_bad_invites_on_empty_input() {
        let kept = filter_bad_invites(Vec::new(), &pair_and_loner());
        assert!(kept.is_empty());
    }

    #[test]
    fn single_candidate_validation() {
        let edges = find_dislikes(&pair_and_loner());
        assert!(is_valid_invite(&guest_list(["Alice", "Eve"]), &edges));
        assert!(!is_valid_invite(&guest_list(["Eve", "Bob", "Alice"]), &edges));
        assert!(is_valid_invite(&[], &edges));
        assert_eq!(
            first_conflict(&guest_list(["Bob", "Alice"]), &edges),
            Some(&DislikeEdge::new("Alice", "Bob"))
        );
    }

    #[test]
    fn check_guest_list_reports_problems() {
        let graph = pair_and_loner();
        assert!(check_guest_list(&graph, &guest_list(["Bob", "Eve"])).is_ok());

        assert_eq!(
            check_guest_list(&graph, &guest_list(["Alice", "Bob"])),
            Err(InviteError::Conflict {
                edge: DislikeEdge::new("Alice", "Bob")
            })
        );
        assert_eq!(
            check_guest_list(&graph, &guest_list(["Eve", "Zed"])),
            Err(InviteError::UnknownGuest { guest: "Zed".into() })
        );
        assert_eq!(
            check_guest_list(&graph, &guest_list(["Eve", "Eve"])),
            Err(InviteError::DuplicateGuest { guest: "Eve".into() })
        );
    }

    #[test]
    fn conflict_error_names_both_guests() {
        let err = check_guest_list(&pair_and_loner(), &guest_list(["Bob", "Alice"])).unwrap_err();
        assert_eq!(err.to_string(), "guests (Alice, Bob) dislike each other");
    }
}
