use thiserror::Error;

/// Main error type for the search engine.
///
/// Ranking itself never fails; these errors come from the edges
/// (configuration files, catalog import/export).
#[derive(Error, Debug)]
pub enum SearchEngineError {
    /// File system errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML configuration errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration values out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Catalog data that is not a list of candidates
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for SearchEngineError {
    fn from(s: String) -> Self {
        SearchEngineError::Other(s)
    }
}

impl From<&str> for SearchEngineError {
    fn from(s: &str) -> Self {
        SearchEngineError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SearchEngineError>;
