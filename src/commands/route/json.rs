use std::collections::BTreeMap;

use serde::Serialize;

use lazypath_core::graph::ShortestPaths;

use super::sorted_vertices;

/// JSON report for a route; unreachable distances serialize as `null`
#[derive(Debug, Serialize)]
pub struct RouteReport<'a> {
    pub start: &'a str,
    pub distances: BTreeMap<&'a str, Option<f64>>,
    pub predecessors: BTreeMap<&'a str, Option<&'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct PathReport<'a> {
    pub target: &'a str,
    pub vertices: Vec<String>,
    pub length: Option<f64>,
}

pub fn render<'a>(
    result: &'a ShortestPaths<String>,
    target: Option<&'a String>,
) -> RouteReport<'a> {
    let vertices = sorted_vertices(result);

    let distances = vertices
        .iter()
        .map(|&v| {
            let d = result.distance(v).filter(|d| d.is_finite());
            (v.as_str(), d)
        })
        .collect();

    let predecessors = vertices
        .iter()
        .map(|&v| (v.as_str(), result.predecessor(v).map(String::as_str)))
        .collect();

    let path = target.map(|t| PathReport {
        target: t.as_str(),
        vertices: result.path_to(t),
        length: result.distance(t).filter(|d| d.is_finite()),
    });

    RouteReport {
        start: result.start().as_str(),
        distances,
        predecessors,
        path,
    }
}
