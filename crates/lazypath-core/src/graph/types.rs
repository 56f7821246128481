use std::collections::HashMap;

use crate::graph::path::reconstruct_path;
use crate::graph::Vertex;

/// Best known distance from the start vertex; `f64::INFINITY` when unreached
pub type DistanceTable<V> = HashMap<V, f64>;

/// Source of the last improving edge for each vertex
pub type PredecessorTable<V> = HashMap<V, Option<V>>;

/// Options controlling a single engine run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Re-check all edge weights before running
    pub validate_weights: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            validate_weights: true,
        }
    }
}

/// Queue activity counters for one engine run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries pushed onto the frontier, including the seed
    pub pushes: usize,
    /// Entries popped from the frontier
    pub pops: usize,
    /// Popped entries discarded because a shorter distance was already known
    pub stale_pops: usize,
    /// Edge relaxations that improved a distance
    pub relaxations: usize,
}

/// Output of a shortest-path run, owned by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<V: Vertex> {
    start: V,
    /// Distance from the start vertex for every vertex in the graph
    pub dist: DistanceTable<V>,
    /// Predecessor on a shortest path for every vertex in the graph
    pub prev: PredecessorTable<V>,
    stats: SearchStats,
}

impl<V: Vertex> ShortestPaths<V> {
    pub(crate) fn new(
        start: V,
        dist: DistanceTable<V>,
        prev: PredecessorTable<V>,
        stats: SearchStats,
    ) -> Self {
        Self {
            start,
            dist,
            prev,
            stats,
        }
    }

    pub fn start(&self) -> &V {
        &self.start
    }

    /// Distance to `v`; `None` if `v` is not a vertex of the graph
    pub fn distance(&self, v: &V) -> Option<f64> {
        self.dist.get(v).copied()
    }

    pub fn is_reachable(&self, v: &V) -> bool {
        self.distance(v).is_some_and(f64::is_finite)
    }

    pub fn predecessor(&self, v: &V) -> Option<&V> {
        self.prev.get(v).and_then(Option::as_ref)
    }

    /// Shortest path from the start vertex to `target`, empty if unreachable
    pub fn path_to(&self, target: &V) -> Vec<V> {
        reconstruct_path(&self.prev, &self.start, target)
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Split into the `(dist, prev)` tables
    pub fn into_parts(self) -> (DistanceTable<V>, PredecessorTable<V>) {
        (self.dist, self.prev)
    }
}
