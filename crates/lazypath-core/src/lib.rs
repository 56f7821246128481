//! Lazypath Core Library
//!
//! Single-source shortest paths over non-negatively weighted graphs:
//! an adjacency-list graph store, Dijkstra's algorithm driven by a
//! lazy-deletion priority queue, and predecessor-based path reconstruction.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
