//! Error types for the Full Stack services

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FullstackError>;

#[derive(Error, Debug)]
pub enum FullstackError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl FullstackError {
    /// The underlying driver message without the category prefix.
    ///
    /// Handlers hand this text to clients verbatim.
    pub fn message(&self) -> String {
        match self {
            FullstackError::Serialization(m)
            | FullstackError::Database(m)
            | FullstackError::Cache(m)
            | FullstackError::Config(m) => m.clone(),
        }
    }
}

impl From<serde_json::Error> for FullstackError {
    fn from(e: serde_json::Error) -> Self {
        FullstackError::Serialization(e.to_string())
    }
}

impl From<::config::ConfigError> for FullstackError {
    fn from(e: ::config::ConfigError) -> Self {
        FullstackError::Config(e.to_string())
    }
}
