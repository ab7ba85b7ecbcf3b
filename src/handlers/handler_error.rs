use crate::config::ConfigError;
use crate::core::auth::AuthError;
use crate::core::puzzle::{GeneratorError, StoreError};
use thiserror::Error;

/// The first failure of an invocation. Every variant is terminal.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("HTTP client setup failed: {0}")]
    Client(#[from] reqwest::Error),
    #[error("Puzzle generation failed: {0}")]
    Generation(#[from] GeneratorError),
    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),
    #[error("Puzzle store failed: {0}")]
    Store(#[from] StoreError),
}
