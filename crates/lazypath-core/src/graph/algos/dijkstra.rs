use crate::error::{LazypathError, Result};
use crate::graph::store::Graph;
use crate::graph::types::{
    DistanceTable, EngineOptions, PredecessorTable, SearchStats, ShortestPaths,
};
use crate::graph::Vertex;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Instant;

/// Frontier entry, wrapped in `Reverse` to make `BinaryHeap` a min-heap.
///
/// Ordered by distance, then by push sequence, so equal distances pop in
/// the order they were pushed.
#[derive(Debug, Clone)]
pub struct HeapEntry<V> {
    pub vertex: V,
    pub distance: f64,
    pub seq: u64,
}

impl<V> PartialEq for HeapEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V> Eq for HeapEntry<V> {}

impl<V> PartialOrd for HeapEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for HeapEntry<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// State tracked during a run
struct DijkstraState<V> {
    dist: DistanceTable<V>,
    prev: PredecessorTable<V>,
    heap: BinaryHeap<Reverse<HeapEntry<V>>>,
    next_seq: u64,
    stats: SearchStats,
}

impl<V: Vertex> DijkstraState<V> {
    fn new(graph: &Graph<V>, start: &V) -> Self {
        let mut dist: DistanceTable<V> = graph
            .vertices()
            .map(|v| (v.clone(), f64::INFINITY))
            .collect();
        let prev: PredecessorTable<V> = graph.vertices().map(|v| (v.clone(), None)).collect();
        dist.insert(start.clone(), 0.0);

        let mut state = Self {
            dist,
            prev,
            heap: BinaryHeap::new(),
            next_seq: 0,
            stats: SearchStats::default(),
        };
        state.push(start.clone(), 0.0);
        state
    }

    fn push(&mut self, vertex: V, distance: f64) {
        self.heap.push(Reverse(HeapEntry {
            vertex,
            distance,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
        self.stats.pushes += 1;
    }

    fn best(&self, v: &V) -> f64 {
        self.dist.get(v).copied().unwrap_or(f64::INFINITY)
    }

    /// Relax every outgoing edge of a freshly settled vertex
    fn relax_from(&mut self, graph: &Graph<V>, current: &V, distance: f64) {
        for (neighbor, weight) in graph.neighbors(current) {
            let candidate = distance + weight;
            if candidate < self.best(neighbor) {
                tracing::trace!(from = %current, to = %neighbor, distance = candidate, "relax");
                self.dist.insert(neighbor.clone(), candidate);
                self.prev.insert(neighbor.clone(), Some(current.clone()));
                self.stats.relaxations += 1;
                self.push(neighbor.clone(), candidate);
            }
        }
    }
}

/// Single-source shortest paths with default [`EngineOptions`].
///
/// See [`shortest_paths_with`].
pub fn shortest_paths<V: Vertex>(graph: &Graph<V>, start: &V) -> Result<ShortestPaths<V>> {
    shortest_paths_with(graph, start, &EngineOptions::default())
}

/// Compute shortest distances and predecessors from `start`.
///
/// Improvements push a fresh frontier entry instead of updating the old
/// one; popped entries whose distance no longer matches the distance table
/// are stale and discarded without touching any state. Vertices that cannot
/// be reached keep an infinite distance and no predecessor.
///
/// Fails with [`LazypathError::UnknownVertex`] if `start` is not in the
/// graph, and with [`LazypathError::InvalidWeight`] if weight validation is
/// enabled and a negative weight is found.
#[tracing::instrument(skip_all, fields(start = %start, vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn shortest_paths_with<V: Vertex>(
    graph: &Graph<V>,
    start: &V,
    opts: &EngineOptions,
) -> Result<ShortestPaths<V>> {
    let started = Instant::now();

    if !graph.contains(start) {
        return Err(LazypathError::unknown_vertex(start));
    }
    if opts.validate_weights {
        graph.validate_weights()?;
    }

    let mut state = DijkstraState::new(graph, start);

    while let Some(Reverse(HeapEntry {
        vertex: current,
        distance,
        ..
    })) = state.heap.pop()
    {
        state.stats.pops += 1;

        // Lazy deletion: a shorter distance was recorded after this push
        if distance != state.best(&current) {
            state.stats.stale_pops += 1;
            tracing::trace!(vertex = %current, distance, "skip stale entry");
            continue;
        }

        state.relax_from(graph, &current, distance);
    }

    let stats = state.stats;
    let reached = state.dist.values().filter(|d| d.is_finite()).count();
    tracing::debug!(
        pushes = stats.pushes,
        pops = stats.pops,
        stale_pops = stats.stale_pops,
        relaxations = stats.relaxations,
        reached,
        "shortest_paths complete"
    );
    crate::trace_time!(started, "shortest_paths");

    Ok(ShortestPaths::new(start.clone(), state.dist, state.prev, stats))
}

#[cfg(test)]
mod tests;
