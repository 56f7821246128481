//! Graph storage and shortest-path operations
//!
//! - `store`: adjacency-list graph with validated edge insertion
//! - `algos`: Dijkstra's algorithm with a lazy-deletion priority queue
//! - `path`: path reconstruction from predecessor links
//! - `types`: result tables and engine options

pub mod algos;
pub mod path;
pub mod store;
pub mod types;

pub use algos::{shortest_paths, shortest_paths_with};
pub use path::reconstruct_path;
pub use store::{Adjacency, Graph};
pub use types::{DistanceTable, EngineOptions, PredecessorTable, SearchStats, ShortestPaths};

use std::fmt::Display;
use std::hash::Hash;

/// Identifier for a graph vertex.
///
/// Anything usable as a map key that can also be named in error messages:
/// `String`, `&str`, integers.
pub trait Vertex: Clone + Eq + Hash + Display {}

impl<T: Clone + Eq + Hash + Display> Vertex for T {}
