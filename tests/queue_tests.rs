//! Pending-queue ordering and rebuild tests

use waste_sim::simulation::{
    priority_weight, BinKind, BinRegistry, PendingQueue, WasteBin, ZoneGraph, ZoneId,
};

fn bin_at(id: &str, zone: u32, close: u64) -> WasteBin {
    WasteBin::new(id, ZoneId(zone), BinKind::General, 1, 0, close)
}

/// Pops come out in ascending weight order; equal weights keep the
/// registry insertion order.
#[test]
fn test_build_orders_ascending_with_stable_ties() {
    let graph = ZoneGraph::from_edges([(0, 1, 4), (0, 2, 2)]).expect("graph");
    let registry = BinRegistry::new(vec![
        bin_at("wb1", 1, 10), // 4 + 10 = 14
        bin_at("wb2", 2, 12), // 2 + 12 = 14, ties with wb1
        bin_at("wb3", 2, 5),  // 2 + 5 = 7
    ]);

    let mut queue = PendingQueue::build(&registry, ZoneId(0), &graph).expect("build");
    assert_eq!(queue.len(), 3);

    let order: Vec<usize> = std::iter::from_fn(|| queue.pop_min().map(|e| e.bin)).collect();
    assert_eq!(order, vec![2, 0, 1]);
    assert!(queue.is_empty());
}

/// Rebuilding recomputes every weight against the new vehicle zone.
#[test]
fn test_rebuild_recomputes_weights() {
    let graph =
        ZoneGraph::from_edges([(0, 1, 1), (0, 2, 2), (1, 2, 9), (2, 1, 3)]).expect("graph");
    let registry = BinRegistry::new(vec![bin_at("wb1", 1, 7), bin_at("wb2", 2, 3)]);

    let mut queue = PendingQueue::build(&registry, ZoneId(0), &graph).expect("build");
    queue.rebuild(ZoneId(1), &graph, &registry).expect("rebuild");

    for entry in queue.iter() {
        let bin = registry.get(entry.bin).expect("bin");
        let expected = priority_weight(bin, ZoneId(1), &graph).expect("weight");
        assert_eq!(entry.weight, expected);
    }
}

/// Weights that tie after a rebuild keep the relative order they had in
/// the previous ordering, not the registry order.
#[test]
fn test_rebuild_ties_preserve_previous_order() {
    let graph =
        ZoneGraph::from_edges([(0, 1, 1), (0, 2, 2), (3, 1, 3), (3, 2, 7)]).expect("graph");
    // Initial weights at the depot: wb1 = 8, wb2 = 5, so the queue holds
    // [wb2, wb1]. At zone 3 both recompute to 10.
    let registry = BinRegistry::new(vec![bin_at("wb1", 1, 7), bin_at("wb2", 2, 3)]);

    let mut queue = PendingQueue::build(&registry, ZoneId(0), &graph).expect("build");
    queue.rebuild(ZoneId(3), &graph, &registry).expect("rebuild");

    let order: Vec<usize> = std::iter::from_fn(|| queue.pop_min().map(|e| e.bin)).collect();
    assert_eq!(order, vec![1, 0]);
}

#[test]
fn test_peek_is_non_destructive_and_empty_pop_is_none() {
    let mut queue = PendingQueue::new();
    assert!(queue.pop_min().is_none());
    assert!(queue.peek_min().is_none());

    queue.insert(9, 0);
    queue.insert(4, 1);

    let peeked = queue.peek_min().copied().expect("peek");
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.pop_min().expect("pop"), peeked);
    assert_eq!(peeked.bin, 1);
}

/// A rebuild against a zone with no outbound roads surfaces the missing
/// edge instead of assuming a zero cost.
#[test]
fn test_rebuild_missing_edge_errors() {
    let graph = ZoneGraph::from_edges([(0, 1, 4), (5, 9, 2)]).expect("graph");
    let registry = BinRegistry::new(vec![bin_at("wb1", 1, 10)]);

    let mut queue = PendingQueue::build(&registry, ZoneId(0), &graph).expect("build");
    let err = queue
        .rebuild(ZoneId(5), &graph, &registry)
        .expect_err("must fail");
    assert!(matches!(
        err,
        waste_sim::simulation::SimError::MissingEdge { .. }
    ));
}
