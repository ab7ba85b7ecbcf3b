use super::puzzle_id::PuzzleId;
use super::puzzle_models::Puzzle;
use crate::core::auth::AccessToken;
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Puzzle {0} not found")]
    NotFound(PuzzleId),
    #[error("Document store returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Transport error: {0}")]
    Transport(String),
}

impl StoreError {
    /// Server-side and connection failures may succeed on a later attempt.
    pub fn is_transient(&self) -> bool {
        match self {
            StoreError::Api { status, .. } => *status == 429 || *status >= 500,
            StoreError::Transport(_) => true,
            _ => false,
        }
    }
}

/// Keyed persistence for daily puzzles.
///
/// Writes overwrite whatever is stored under the same ID. Reads hand back the
/// stored JSON string untouched so the client receives exactly what was written.
#[async_trait]
pub trait PuzzleStore: Send + Sync {
    async fn put(&self, token: &AccessToken, id: PuzzleId, puzzle: &Puzzle)
        -> Result<(), StoreError>;
    async fn get_raw(&self, token: &AccessToken, id: PuzzleId) -> Result<String, StoreError>;
}
