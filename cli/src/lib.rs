pub mod app;
pub mod args;
pub mod authorize;
pub mod colors;
pub mod display;
pub mod transport;

// Re-export commonly used items
pub use app::{RunSummary, collect_graph, run, write_graph};
pub use args::{Args, OutputFormat};
pub use authorize::ConsoleAuthorizer;
pub use display::format_number;
pub use transport::ReqwestTransport;
