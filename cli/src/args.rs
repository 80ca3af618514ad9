use clap::{Parser, ValueEnum};
use musigraph_core::{ExportFormat, FetchConfig};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "musigraph")]
#[command(about = "Build an artist affinity graph from your Last.fm top artists")]
pub struct Args {
    /// Path to the JSON file holding Last.fm credentials
    #[arg(long, value_name = "PATH", default_value = "./config.json")]
    pub config: PathBuf,

    /// Where to write the graph
    #[arg(short, long, value_name = "PATH", default_value = "graph.gexf")]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Gexf)]
    pub format: OutputFormat,

    /// Number of top artists to expand
    #[arg(short, long, value_name = "COUNT", default_value = "50")]
    pub limit: usize,

    /// Number of similar artists fetched per top artist
    #[arg(short, long, value_name = "COUNT", default_value = "10")]
    pub similar_limit: usize,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - log every request
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Gexf,
    Json,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Gexf => ExportFormat::Gexf,
            OutputFormat::Json => ExportFormat::Json,
        }
    }
}

impl Args {
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig::new(self.limit, self.similar_limit)
    }
}
