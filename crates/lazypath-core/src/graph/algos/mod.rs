//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source shortest paths with lazy deletion

pub mod dijkstra;

pub use dijkstra::{shortest_paths, shortest_paths_with};
