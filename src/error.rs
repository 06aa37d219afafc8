//! Error types for mediacache

use thiserror::Error;

use crate::client::models::ResourceKind;

/// Result type alias for mediacache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}

/// Failures talking to the upstream GraphQL service
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Upstream returned unexpected status code: {0}")]
    Status(u16),

    #[error("Upstream GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQl(Vec<serde_json::Value>),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            UpstreamError::Network("Failed to connect to upstream".to_string())
        } else {
            UpstreamError::Network(err.to_string())
        }
    }
}

/// Render GraphQL error objects by their `message` field where present
fn format_graphql_errors(errors: &[serde_json::Value]) -> String {
    errors
        .iter()
        .map(|e| match e.get("message").and_then(|m| m.as_str()) {
            Some(msg) => msg.to_string(),
            None => e.to_string(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// A payload did not match the closed schema for its resource kind
#[derive(Debug, Error)]
#[error("{kind} payload failed validation: {message}")]
pub struct ValidationError {
    pub kind: ResourceKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(kind: ResourceKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Cache store errors
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Cache entry already exists for {kind} key '{key}'")]
    Duplicate { kind: ResourceKind, key: String },

    #[error("Cache entry for {kind} key '{key}' vanished after write")]
    Missing { kind: ResourceKind, key: String },

    #[error("Invalid timestamp in cache entry: {0}")]
    Timestamp(String),

    #[error("Cache connection lock poisoned")]
    Poisoned,

    #[error("Could not determine cache directory")]
    NoHome,

    #[error("Cache I/O error: {0}")]
    Io(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
