use thiserror::Error;

#[derive(Error, Debug)]
pub enum MusigraphError {
    /// Credential document is missing required fields or carries unknown ones
    #[error("Configuration error: {0}")]
    Config(String),

    /// The service answered with an `error` field
    #[error("Last.fm API error {code}: {message}")]
    Api { code: i64, message: String },

    /// Network or connection failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// A success response without the expected payload
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The interactive authorization step could not complete
    #[error("Authorization failed: {0}")]
    Authorization(String),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MusigraphError>;
