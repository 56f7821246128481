//! Adjacency-list graph store

use std::collections::HashMap;

use crate::error::{LazypathError, Result};
use crate::graph::Vertex;

/// In-memory interchange format: vertex to ordered `(neighbor, weight)` list
pub type Adjacency<V> = HashMap<V, Vec<(V, f64)>>;

/// Weighted graph stored as adjacency lists.
///
/// Every endpoint of an inserted edge is a key, even when it has no outgoing
/// edges. Parallel edges and self-loops are kept as inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<V: Vertex> {
    adjacency: Adjacency<V>,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Build a graph from `(u, v, w)` triples, stopping at the first invalid weight
    pub fn from_edges<I>(edges: I, undirected: bool) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V, f64)>,
    {
        let mut graph = Self::new();
        for (u, v, w) in edges {
            graph.insert_edge(u, v, w, undirected)?;
        }
        Ok(graph)
    }

    /// Insert an edge `u -> v` with weight `w`, mirrored as `v -> u` when
    /// `undirected` is set.
    ///
    /// Fails with [`LazypathError::InvalidWeight`] for negative or NaN
    /// weights, in which case the graph is left untouched.
    pub fn insert_edge(&mut self, u: V, v: V, w: f64, undirected: bool) -> Result<()> {
        check_weight(&u, &v, w)?;

        tracing::trace!(from = %u, to = %v, weight = w, undirected, "insert_edge");

        self.adjacency
            .entry(u.clone())
            .or_default()
            .push((v.clone(), w));
        let reverse = self.adjacency.entry(v).or_default();
        if undirected {
            reverse.push((u, w));
        }
        Ok(())
    }

    /// Register a vertex without edges. No-op if already present.
    pub fn add_vertex(&mut self, v: V) {
        self.adjacency.entry(v).or_default();
    }

    pub fn contains(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Outgoing edges of `v` in insertion order (empty for unknown vertices)
    pub fn neighbors(&self, v: &V) -> &[(V, f64)] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored adjacency entries; an undirected edge counts twice
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Report the first negative or NaN weight
    pub fn validate_weights(&self) -> Result<()> {
        for (u, edges) in &self.adjacency {
            for (v, w) in edges {
                check_weight(u, v, *w)?;
            }
        }
        Ok(())
    }

    /// Borrow the underlying adjacency map
    pub fn adjacency(&self) -> &Adjacency<V> {
        &self.adjacency
    }
}

/// Adopts a raw adjacency map. Missing endpoint keys are added; weights are
/// not checked here (see [`Graph::validate_weights`]).
impl<V: Vertex> From<Adjacency<V>> for Graph<V> {
    fn from(mut adjacency: Adjacency<V>) -> Self {
        let missing: Vec<V> = adjacency
            .values()
            .flatten()
            .filter(|(v, _)| !adjacency.contains_key(v))
            .map(|(v, _)| v.clone())
            .collect();
        for v in missing {
            adjacency.entry(v).or_default();
        }
        Self { adjacency }
    }
}

fn check_weight<V: Vertex>(u: &V, v: &V, w: f64) -> Result<()> {
    if w.is_nan() || w < 0.0 {
        return Err(LazypathError::invalid_weight(u, v, w));
    }
    Ok(())
}
