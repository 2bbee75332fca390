//! End-to-end checks of the planner on the classic dinner-party graphs.

use guestlist::prelude::*;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use std::collections::{BTreeSet, HashSet};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn party() -> DislikeGraph {
    DislikeGraph::new([
        ("Alice", vec!["Bob"]),
        ("Bob", vec!["Alice", "Eve"]),
        ("Cleo", vec![]),
        ("Don", vec![]),
        ("Eve", vec!["Bob"]),
    ])
    .unwrap()
}

fn cliques_and_paths() -> DislikeGraph {
    DislikeGraph::new([
        ("Asa", vec![]),
        ("Bear", vec!["Cate"]),
        ("Cate", vec!["Bear", "Dave"]),
        ("Dave", vec!["Cate", "Eve"]),
        ("Eve", vec!["Dave"]),
        ("Finn", vec!["Ginny", "Haruki", "Ivan"]),
        ("Ginny", vec!["Finn", "Haruki"]),
        ("Haruki", vec!["Ginny", "Finn"]),
        ("Ivan", vec!["Finn"]),
    ])
    .unwrap()
}

/// No valid list one guest longer than `len` exists.
fn assert_maximal(graph: &DislikeGraph, len: usize) {
    let people: Vec<Person> = graph.people().cloned().collect();
    let edges = find_dislikes(graph);
    let longer = Subsets::new(&people)
        .filter(|s| s.len() == len + 1)
        .any(|s| is_valid_invite(&s, &edges));
    assert!(!longer, "found a valid list of {} guests", len + 1);
}

#[test]
fn dislike_edges_of_a_path() {
    let graph = DislikeGraph::new([
        ("Alice", vec!["Bob"]),
        ("Bob", vec!["Alice", "Eve"]),
        ("Eve", vec!["Bob"]),
    ])
    .unwrap();
    let expected: BTreeSet<DislikeEdge> = [
        DislikeEdge::new("Alice", "Bob"),
        DislikeEdge::new("Bob", "Eve"),
    ]
    .into_iter()
    .collect();
    assert_eq!(find_dislikes(&graph), expected);
}

#[test]
fn free_invites_are_split_off() {
    let (free, residual) = filter_no_dislikes(&party());
    assert_eq!(free, vec!["Cleo", "Don"]);
    let entries: Vec<(String, Vec<String>)> = residual
        .iter()
        .map(|(p, d)| (p.to_string(), d.iter().map(ToString::to_string).collect()))
        .collect();
    assert_eq!(
        entries,
        vec![
            ("Alice".to_string(), vec!["Bob".to_string()]),
            ("Bob".to_string(), vec!["Alice".to_string(), "Eve".to_string()]),
            ("Eve".to_string(), vec!["Bob".to_string()]),
        ]
    );
}

#[test]
fn every_strategy_seats_four_at_the_party() {
    init_tracing();
    let graph = party();
    for strategy in Strategy::ALL {
        let guests = DinnerPlanner::default().plan(&graph, strategy).unwrap();
        let set: HashSet<&str> = guests.iter().map(Person::as_str).collect();

        assert_eq!(guests.len(), 4, "{strategy}");
        assert!(set.contains("Cleo") && set.contains("Don"), "{strategy}");
        assert!(!set.contains("Bob"), "{strategy}");
        assert!(set.contains("Alice") && set.contains("Eve"), "{strategy}");
        check_guest_list(&graph, &guests).unwrap();
    }
    assert_maximal(&graph, 4);
}

#[test]
fn demonstration_outputs() {
    let graph = party();
    assert_eq!(plan_exhaustive(&graph).unwrap(), vec!["Alice", "Cleo", "Don", "Eve"]);
    assert_eq!(plan_prefiltered(&graph).unwrap(), vec!["Alice", "Eve", "Cleo", "Don"]);
    assert_eq!(plan_integrated(&graph).unwrap(), vec!["Alice", "Cleo", "Don", "Eve"]);
}

#[test]
fn empty_graph_has_empty_guest_list() {
    let graph = DislikeGraph::empty();
    assert!(plan_exhaustive(&graph).unwrap().is_empty());
    assert!(plan_prefiltered(&graph).unwrap().is_empty());
    assert!(plan_integrated(&graph).unwrap().is_empty());
}

#[test]
fn everyone_dislikes_everyone() {
    for n in 1..=6 {
        let names: Vec<String> = (0..n).map(|i| format!("guest{i}")).collect();
        let entries: Vec<(String, Vec<String>)> = names
            .iter()
            .map(|me| {
                let others = names.iter().filter(|o| *o != me).cloned().collect();
                (me.clone(), others)
            })
            .collect();
        let graph = DislikeGraph::new(entries).unwrap();

        for strategy in Strategy::ALL {
            let guests = DinnerPlanner::default().plan(&graph, strategy).unwrap();
            assert_eq!(guests.len(), 1, "n={n} {strategy}");
        }
        assert_maximal(&graph, 1);
    }
}

#[test]
fn cliques_and_paths_seat_five() {
    init_tracing();
    let graph = cliques_and_paths();
    let sizes: Vec<usize> = Strategy::ALL
        .iter()
        .map(|&s| DinnerPlanner::default().plan(&graph, s).unwrap().len())
        .collect();
    assert_eq!(sizes, vec![5, 5, 5]);
    assert_eq!(independence_number(&graph), 5);
    assert_maximal(&graph, 5);
}

#[test]
fn strategies_agree_on_random_graphs() {
    let mut rng = XorShiftRng::seed_from_u64(0x5EA7);
    let planner = DinnerPlanner::default();
    for case in 0..30 {
        let graph = DislikeGraph::new_random(&mut rng, 2 + case % 9, 0.4).unwrap();
        let lists: Vec<GuestList> = Strategy::ALL
            .iter()
            .map(|&s| planner.plan(&graph, s).unwrap())
            .collect();

        for guests in &lists {
            assert_eq!(guests.len(), lists[0].len(), "case {case}");
            check_guest_list(&graph, guests).unwrap();
        }
        assert_maximal(&graph, lists[0].len());
    }
}

#[test]
fn malformed_graphs_fail_fast() {
    let one_sided = DislikeGraph::new([("Alice", vec!["Bob"]), ("Bob", vec![])]).unwrap_err();
    assert_eq!(
        one_sided.to_string(),
        "Alice dislikes Bob, but Bob does not dislike Alice"
    );

    let unknown = DislikeGraph::new([("Alice", vec!["Zed"])]).unwrap_err();
    assert_eq!(unknown.to_string(), "Alice dislikes Zed, who is not in the graph");

    let selfish = DislikeGraph::new([("Alice", vec!["Alice"])]).unwrap_err();
    assert_eq!(selfish.to_string(), "person Alice dislikes themself");
}
