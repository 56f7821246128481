use super::*;
use crate::graph::store::Adjacency;
use std::collections::HashMap;

fn example_graph() -> Graph<&'static str> {
    Graph::from_edges(
        vec![
            ("A", "B", 5.0),
            ("A", "C", 10.0),
            ("B", "D", 3.0),
            ("C", "D", 2.0),
            ("D", "E", 4.0),
        ],
        true,
    )
    .unwrap()
}

/// Three routes into X of decreasing cost, discovered in increasing order of
/// the intermediate vertex's distance, leaving two stale entries for X.
fn stale_entry_graph() -> Graph<&'static str> {
    Graph::from_edges(
        vec![
            ("S", "X", 10.0),
            ("S", "A", 1.0),
            ("S", "B", 2.0),
            ("A", "X", 5.0),
            ("B", "X", 1.0),
            ("X", "Y", 1.0),
        ],
        false,
    )
    .unwrap()
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        vertex: "A",
        distance: 1.0,
        seq: 0,
    };
    let entry2 = HeapEntry {
        vertex: "B",
        distance: 2.0,
        seq: 1,
    };
    let entry3 = HeapEntry {
        vertex: "C",
        distance: 1.0,
        seq: 2,
    };

    // Lower distance should compare as less (normal ordering)
    assert_eq!(entry1.cmp(&entry2), std::cmp::Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), std::cmp::Ordering::Greater);

    // Equal distances fall back to push order
    assert_eq!(entry1.cmp(&entry3), std::cmp::Ordering::Less);

    assert_eq!(entry1, entry1.clone());
    assert_ne!(entry1, entry3);
}

/// Test that Reverse turns the heap into a min-heap with FIFO ties
#[test]
fn test_heap_pops_minimum_first() {
    let mut heap = BinaryHeap::new();
    for (seq, (vertex, distance)) in [("late", 3.0), ("tie-1", 1.0), ("tie-2", 1.0), ("zero", 0.0)]
        .into_iter()
        .enumerate()
    {
        heap.push(Reverse(HeapEntry {
            vertex,
            distance,
            seq: seq as u64,
        }));
    }

    let order: Vec<&str> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.vertex)).collect();
    assert_eq!(order, vec!["zero", "tie-1", "tie-2", "late"]);
}

#[test]
fn test_example_graph_distances() {
    let result = shortest_paths(&example_graph(), &"A").unwrap();

    assert_eq!(result.distance(&"A"), Some(0.0));
    assert_eq!(result.distance(&"B"), Some(5.0));
    assert_eq!(result.distance(&"C"), Some(10.0));
    assert_eq!(result.distance(&"D"), Some(8.0));
    assert_eq!(result.distance(&"E"), Some(12.0));
    assert_eq!(result.path_to(&"E"), vec!["A", "B", "D", "E"]);
}

#[test]
fn test_example_graph_predecessors() {
    let result = shortest_paths(&example_graph(), &"A").unwrap();

    assert_eq!(result.predecessor(&"A"), None);
    assert_eq!(result.predecessor(&"B"), Some(&"A"));
    assert_eq!(result.predecessor(&"C"), Some(&"A"));
    assert_eq!(result.predecessor(&"D"), Some(&"B"));
    assert_eq!(result.predecessor(&"E"), Some(&"D"));
}

#[test]
fn test_single_vertex_graph() {
    let mut graph = Graph::new();
    graph.add_vertex("S");

    let (dist, prev) = shortest_paths(&graph, &"S").unwrap().into_parts();

    assert_eq!(dist, HashMap::from([("S", 0.0)]));
    assert_eq!(prev, HashMap::from([("S", None)]));
}

#[test]
fn test_unknown_start_vertex() {
    let err = shortest_paths(&example_graph(), &"Z").unwrap_err();
    match err {
        LazypathError::UnknownVertex { vertex } => assert_eq!(vertex, "Z"),
        other => panic!("expected UnknownVertex, got {:?}", other),
    }
}

#[test]
fn test_unreachable_vertex_is_not_an_error() {
    let mut graph = example_graph();
    graph.insert_edge("X", "Y", 1.0, true).unwrap();
    graph.add_vertex("Lonely");

    let result = shortest_paths(&graph, &"A").unwrap();

    for v in ["X", "Y", "Lonely"] {
        assert_eq!(result.distance(&v), Some(f64::INFINITY));
        assert_eq!(result.predecessor(&v), None);
        assert!(!result.is_reachable(&v));
        assert!(result.path_to(&v).is_empty());
    }
    assert!(result.is_reachable(&"E"));
}

#[test]
fn test_start_without_outgoing_edges() {
    let mut graph = Graph::new();
    graph.insert_edge("A", "B", 1.0, false).unwrap();

    let result = shortest_paths(&graph, &"B").unwrap();

    assert_eq!(result.distance(&"B"), Some(0.0));
    assert_eq!(result.distance(&"A"), Some(f64::INFINITY));
    assert_eq!(result.stats().pops, 1);
}

#[test]
fn test_directed_edges_are_one_way() {
    let mut graph = Graph::new();
    graph.insert_edge("A", "B", 2.0, false).unwrap();

    let from_a = shortest_paths(&graph, &"A").unwrap();
    let from_b = shortest_paths(&graph, &"B").unwrap();

    assert_eq!(from_a.distance(&"B"), Some(2.0));
    assert_eq!(from_b.distance(&"A"), Some(f64::INFINITY));
}

#[test]
fn test_parallel_edges_prefer_lighter() {
    let mut graph = Graph::new();
    graph.insert_edge("A", "B", 9.0, true).unwrap();
    graph.insert_edge("A", "B", 4.0, true).unwrap();

    let result = shortest_paths(&graph, &"A").unwrap();
    assert_eq!(result.distance(&"B"), Some(4.0));
}

#[test]
fn test_zero_weight_edges() {
    let graph = Graph::from_edges(vec![("A", "B", 0.0), ("B", "C", 0.0)], false).unwrap();
    let result = shortest_paths(&graph, &"A").unwrap();

    assert_eq!(result.distance(&"C"), Some(0.0));
    assert_eq!(result.path_to(&"C"), vec!["A", "B", "C"]);
}

#[test]
fn test_fractional_weights() {
    let graph = Graph::from_edges(vec![("A", "B", 0.5), ("B", "C", 0.25), ("A", "C", 1.0)], true)
        .unwrap();
    let result = shortest_paths(&graph, &"A").unwrap();
    assert_eq!(result.distance(&"C"), Some(0.75));
}

#[test]
fn test_stale_entries_are_skipped() {
    let result = shortest_paths(&stale_entry_graph(), &"S").unwrap();

    assert_eq!(result.distance(&"X"), Some(3.0));
    assert_eq!(result.predecessor(&"X"), Some(&"B"));
    assert_eq!(result.distance(&"Y"), Some(4.0));

    let stats = result.stats();
    // S, X@10, A, B, X@6, X@3, Y
    assert_eq!(stats.pushes, 7);
    assert_eq!(stats.pops, 7);
    assert_eq!(stats.stale_pops, 2);
    // Stale pops of X@6 and X@10 relax nothing
    assert_eq!(stats.relaxations, 6);
}

#[test]
fn test_queue_drains_completely() {
    let result = shortest_paths(&example_graph(), &"A").unwrap();
    let stats = result.stats();
    assert_eq!(stats.pushes, stats.pops);
    assert_eq!(stats.pushes, stats.relaxations + 1);
}

#[test]
fn test_equal_cost_tie_follows_push_order() {
    // Both A and B reach T at cost 2; A is pushed first so it settles first
    let graph = Graph::from_edges(
        vec![
            ("S", "A", 1.0),
            ("S", "B", 1.0),
            ("A", "T", 1.0),
            ("B", "T", 1.0),
        ],
        false,
    )
    .unwrap();
    let result = shortest_paths(&graph, &"S").unwrap();
    assert_eq!(result.distance(&"T"), Some(2.0));
    assert_eq!(result.predecessor(&"T"), Some(&"A"));

    let swapped = Graph::from_edges(
        vec![
            ("S", "B", 1.0),
            ("S", "A", 1.0),
            ("A", "T", 1.0),
            ("B", "T", 1.0),
        ],
        false,
    )
    .unwrap();
    let result = shortest_paths(&swapped, &"S").unwrap();
    assert_eq!(result.distance(&"T"), Some(2.0));
    assert_eq!(result.predecessor(&"T"), Some(&"B"));
}

#[test]
fn test_repeated_runs_are_identical() {
    let graph = example_graph();
    let first = shortest_paths(&graph, &"C").unwrap();
    let second = shortest_paths(&graph, &"C").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_adopted_negative_weight_fails_validation() {
    let mut raw: Adjacency<&str> = HashMap::new();
    raw.insert("A", vec![("B", 1.0)]);
    raw.insert("B", vec![("C", -4.0)]);
    let graph = Graph::from(raw);

    let err = shortest_paths(&graph, &"A").unwrap_err();
    assert!(matches!(err, LazypathError::InvalidWeight { .. }));
}

#[test]
fn test_validation_can_be_disabled() {
    let mut raw: Adjacency<&str> = HashMap::new();
    raw.insert("A", vec![("B", 1.0)]);
    let graph = Graph::from(raw);

    let opts = EngineOptions {
        validate_weights: false,
    };
    let result = shortest_paths_with(&graph, &"A", &opts).unwrap();
    assert_eq!(result.distance(&"B"), Some(1.0));
}

#[test]
fn test_integer_vertices() {
    let graph = Graph::from_edges(vec![(1u32, 2u32, 1.5), (2, 3, 1.5), (1, 3, 5.0)], true).unwrap();
    let result = shortest_paths(&graph, &1).unwrap();
    assert_eq!(result.distance(&3), Some(3.0));
    assert_eq!(result.path_to(&3), vec![1, 2, 3]);
}
