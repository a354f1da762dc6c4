use thiserror::Error;

/// Error taxonomy for the report viewer. Transport, Api and NotFound all
/// collapse into the NotFound rendering at the viewer level; the distinction
/// only reaches diagnostic logs.
#[derive(Debug, Error)]
pub enum LumeraError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Backend API error: {0}")]
    Api(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
