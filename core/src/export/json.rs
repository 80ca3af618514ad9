use crate::error::Result;
use crate::graph::ArtistGraph;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct GraphDocument {
    pub nodes: Vec<JsonNode>,
    pub edges: Vec<JsonEdge>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct JsonNode {
    pub id: String,
    pub size: u32,
    pub color: JsonColor,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct JsonColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct JsonEdge {
    pub source: String,
    pub target: String,
}

impl From<&ArtistGraph> for GraphDocument {
    fn from(graph: &ArtistGraph) -> Self {
        let nodes = graph
            .nodes()
            .iter()
            .map(|node| {
                let viz = node.viz();
                JsonNode {
                    id: node.name().to_string(),
                    size: viz.size,
                    color: JsonColor {
                        r: viz.color.r,
                        g: viz.color.g,
                        b: viz.color.b,
                        a: viz.color.a,
                    },
                }
            })
            .collect();

        let edges = graph
            .edges()
            .iter()
            .map(|edge| JsonEdge {
                source: edge.source.clone(),
                target: edge.target.clone(),
            })
            .collect();

        Self { nodes, edges }
    }
}

pub fn write_json<W: Write>(graph: &ArtistGraph, mut writer: W) -> Result<()> {
    let document = GraphDocument::from(graph);
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
