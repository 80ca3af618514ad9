pub mod gexf;
pub mod json;

pub use gexf::write_gexf;
pub use json::{GraphDocument, JsonColor, JsonEdge, JsonNode, write_json};

use crate::error::Result;
use crate::graph::ArtistGraph;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Gexf,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Gexf => "gexf",
            ExportFormat::Json => "json",
        }
    }
}

pub fn export<W: Write>(graph: &ArtistGraph, format: ExportFormat, writer: W) -> Result<()> {
    match format {
        ExportFormat::Gexf => write_gexf(graph, writer),
        ExportFormat::Json => write_json(graph, writer),
    }
}
