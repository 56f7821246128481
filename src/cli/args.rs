use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Start vertex
    #[arg(long, short)]
    pub from: String,

    /// Target vertex; prints the reconstructed path when given
    #[arg(long, short)]
    pub to: Option<String>,

    /// Edge as FROM:TO:WEIGHT (can be specified multiple times)
    #[arg(long, short, action = clap::ArgAction::Append)]
    pub edge: Vec<String>,

    /// Isolated vertex with no edges (can be specified multiple times)
    #[arg(long, action = clap::ArgAction::Append)]
    pub vertex: Vec<String>,

    /// Treat edges as one-way
    #[arg(long, conflicts_with = "undirected")]
    pub directed: bool,

    /// Treat edges as two-way (overrides the config default)
    #[arg(long)]
    pub undirected: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    /// Target vertex for the printed path
    #[arg(long, short, default_value = "E")]
    pub to: String,
}
