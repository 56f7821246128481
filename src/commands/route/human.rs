use lazypath_core::format::format_distance;
use lazypath_core::graph::ShortestPaths;

use super::sorted_vertices;

/// Render the distance table and optional path for terminal output.
///
/// With `quiet` and a target, only the path line is printed.
pub fn render(result: &ShortestPaths<String>, target: Option<&String>, quiet: bool) -> String {
    let mut out = String::new();
    let start = result.start();

    if !(quiet && target.is_some()) {
        out.push_str(&format!("Shortest distances from {}:\n", start));
        for v in sorted_vertices(result) {
            let d = result.distance(v).unwrap_or(f64::INFINITY);
            out.push_str(&format!("  {} -> {}: {}\n", start, v, format_distance(d)));
        }
    }

    if let Some(target) = target {
        if !(quiet || out.is_empty()) {
            out.push('\n');
        }
        let path = result.path_to(target);
        if path.is_empty() {
            out.push_str(&format!("No path from {} to {}\n", start, target));
        } else {
            let d = result.distance(target).unwrap_or(f64::INFINITY);
            out.push_str(&format!(
                "Path {} -> {}: {} (length {})\n",
                start,
                target,
                path.join(" -> "),
                format_distance(d)
            ));
        }
    }

    out
}
