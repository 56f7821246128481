use lazypath_core::error::Result;
use lazypath_core::format::OutputFormat;
use lazypath_core::{bail_invalid, bail_usage};

/// Edge parsed from a `FROM:TO:WEIGHT` argument
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse an edge argument of the form `FROM:TO:WEIGHT`.
///
/// The weight is only checked for being a number here; negative weights are
/// rejected by the graph store.
pub fn parse_edge(s: &str) -> Result<EdgeSpec> {
    let parts: Vec<&str> = s.split(':').map(str::trim).collect();
    let [from, to, weight] = parts.as_slice() else {
        bail_usage!(format!(
            "invalid edge '{}': expected FROM:TO:WEIGHT",
            s
        ));
    };

    if from.is_empty() || to.is_empty() {
        bail_usage!(format!("invalid edge '{}': vertex names cannot be empty", s));
    }

    let weight: f64 = match weight.parse() {
        Ok(w) => w,
        Err(_) => bail_invalid!("edge weight", weight),
    };

    Ok(EdgeSpec {
        from: from.to_string(),
        to: to.to_string(),
        weight,
    })
}
