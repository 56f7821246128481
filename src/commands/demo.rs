//! Demo command: the five-vertex example graph, routed from A

use crate::cli::DemoArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::route;
use lazypath_core::error::Result;
use lazypath_core::graph::Graph;

/// Edges of the example graph, all undirected
pub const DEMO_EDGES: [(&str, &str, f64); 5] = [
    ("A", "B", 5.0),
    ("A", "C", 10.0),
    ("B", "D", 3.0),
    ("C", "D", 2.0),
    ("D", "E", 4.0),
];

pub const DEMO_START: &str = "A";

pub fn demo_graph() -> Result<Graph<String>> {
    Graph::from_edges(
        DEMO_EDGES
            .iter()
            .map(|&(u, v, w)| (u.to_string(), v.to_string(), w)),
        true,
    )
}

/// Execute the demo command
pub fn execute(ctx: &CommandContext, args: &DemoArgs) -> Result<()> {
    let graph = demo_graph()?;
    route::report(ctx, &graph, &DEMO_START.to_string(), Some(&args.to))
}
