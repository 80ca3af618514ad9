pub mod client;
pub mod credentials;
pub mod error;
pub mod export;
pub mod fetch_config;
pub mod fetcher;
pub mod graph;
pub mod models;
pub mod signature;

// Re-export commonly used items
pub use client::{API_ROOT, AUTH_ROOT, AuthState, Authorizer, LastFmClient, Transport};
pub use credentials::{CredentialStore, Credentials};
pub use error::{MusigraphError, Result};
pub use export::{ExportFormat, GraphDocument, export, write_gexf, write_json};
pub use fetch_config::FetchConfig;
pub use fetcher::SimilarityFetcher;
pub use graph::{ArtistGraph, Edge, GraphBuilder, Node, NodeViz, Rgb, Rgba, SEED_COLOR, SIMILAR_COLOR, SimilarityRow};
pub use signature::build_signature;
