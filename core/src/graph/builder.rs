use super::{Edge, Node, SimilarityRow};
use rustc_hash::FxHashMap;

/// Finished artist graph. Nodes keep first-reference order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtistGraph {
    nodes: Vec<Node>,
    index: FxHashMap<String, usize>,
    edges: Vec<Edge>,
}

impl ArtistGraph {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.index.get(name).map(|&position| &self.nodes[position])
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn seed_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_seed()).count()
    }
}

/// Assembles an `ArtistGraph` from similarity rows in a single forward pass.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: ArtistGraph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build<'a, I>(rows: I) -> ArtistGraph
    where
        I: IntoIterator<Item = &'a SimilarityRow>,
    {
        let mut builder = Self::new();
        for row in rows {
            builder.push_row(row);
        }
        builder.finish()
    }

    pub fn push_row(&mut self, row: &SimilarityRow) {
        self.upsert_seed(&row.seed);

        for similar_artist in &row.similar {
            self.upsert_similar(similar_artist);
            self.graph.edges.push(Edge {
                source: row.seed.clone(),
                target: similar_artist.clone(),
            });
        }
    }

    pub fn finish(self) -> ArtistGraph {
        self.graph
    }

    fn upsert_seed(&mut self, name: &str) {
        let existing = self.graph.index.get(name).copied();
        match existing {
            Some(position) => self.graph.nodes[position].upsert_as_seed(),
            None => self.insert(Node::seed(name)),
        }
    }

    fn upsert_similar(&mut self, name: &str) {
        let existing = self.graph.index.get(name).copied();
        match existing {
            Some(position) => self.graph.nodes[position].upsert_as_similar(),
            None => self.insert(Node::similar(name)),
        }
    }

    fn insert(&mut self, node: Node) {
        self.graph
            .index
            .insert(node.name().to_string(), self.graph.nodes.len());
        self.graph.nodes.push(node);
    }
}
