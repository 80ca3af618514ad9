pub mod builder;
pub mod node;

pub use builder::{ArtistGraph, GraphBuilder};
pub use node::{Node, NodeViz, Rgb, Rgba, SEED_COLOR, SIMILAR_COLOR};

/// A top artist together with the artists the service lists as similar to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarityRow {
    pub seed: String,
    pub similar: Vec<String>,
}

impl SimilarityRow {
    pub fn new(seed: impl Into<String>, similar: Vec<String>) -> Self {
        Self {
            seed: seed.into(),
            similar,
        }
    }
}

/// Directed observation "`target` is similar to `source`".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: String,
    pub target: String,
}
