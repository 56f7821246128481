//! Route command: build a graph from CLI edges and report shortest paths

pub mod human;
pub mod json;

use tracing::debug;

use crate::cli::parse::parse_edge;
use crate::cli::{OutputFormat, RouteArgs};
use crate::commands::dispatch::CommandContext;
use lazypath_core::error::{LazypathError, Result};
use lazypath_core::graph::{shortest_paths_with, Graph, ShortestPaths};

/// Execute the route command
pub fn execute(ctx: &CommandContext, args: &RouteArgs) -> Result<()> {
    let undirected = if args.directed {
        false
    } else if args.undirected {
        true
    } else {
        ctx.config.graph.undirected
    };

    let mut graph = Graph::new();
    for raw in &args.edge {
        let edge = parse_edge(raw)?;
        graph.insert_edge(edge.from, edge.to, edge.weight, undirected)?;
    }
    for vertex in &args.vertex {
        graph.add_vertex(vertex.clone());
    }

    debug!(
        elapsed = ?ctx.start.elapsed(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        undirected,
        "build_graph"
    );

    report(ctx, &graph, &args.from, args.to.as_ref())
}

/// Run the engine from `from` and print the result in the requested format
pub fn report(
    ctx: &CommandContext,
    graph: &Graph<String>,
    from: &String,
    to: Option<&String>,
) -> Result<()> {
    if let Some(target) = to {
        if !graph.contains(target) {
            return Err(LazypathError::unknown_vertex(target));
        }
    }

    let result = shortest_paths_with(graph, from, &ctx.config.engine_options())?;

    debug!(elapsed = ?ctx.start.elapsed(), stats = ?result.stats(), "shortest_paths");

    match ctx.cli.format {
        OutputFormat::Human => print!("{}", human::render(&result, to, ctx.cli.quiet)),
        OutputFormat::Json => {
            let report = json::render(&result, to);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

/// Vertices of a result in display order
fn sorted_vertices(result: &ShortestPaths<String>) -> Vec<&String> {
    let mut vertices: Vec<&String> = result.dist.keys().collect();
    vertices.sort();
    vertices
}
