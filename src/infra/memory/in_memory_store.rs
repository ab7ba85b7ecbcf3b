// In-memory implementation of `PuzzleStore`.
//
// Mirrors the Firestore encoding closely enough for handler tests and
// `PUZZLE_STORE=memory` dry runs: the puzzle is serialised to a JSON string on
// write and that exact string comes back on read. Tokens are accepted but not
// checked.

use crate::core::auth::AccessToken;
use crate::core::puzzle::{Puzzle, PuzzleId, PuzzleStore, StoreError};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct InMemoryPuzzleStore {
    /// Maps puzzle ID -> serialised puzzle JSON
    documents: DashMap<PuzzleId, String>,
    writes: AtomicUsize,
}

impl InMemoryPuzzleStore {
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
            writes: AtomicUsize::new(0),
        }
    }

    /// Seeds a raw document, bypassing serialisation.
    pub fn insert_raw(&self, id: PuzzleId, data: impl Into<String>) {
        self.documents.insert(id, data.into());
    }

    /// How many `put` calls have succeeded.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Default for InMemoryPuzzleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PuzzleStore for InMemoryPuzzleStore {
    async fn put(
        &self,
        _token: &AccessToken,
        id: PuzzleId,
        puzzle: &Puzzle,
    ) -> Result<(), StoreError> {
        let data = serde_json::to_string(puzzle)?;
        tracing::info!(puzzle_id = %id, %data, "Stored puzzle in memory");
        self.documents.insert(id, data);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn get_raw(&self, _token: &AccessToken, id: PuzzleId) -> Result<String, StoreError> {
        self.documents
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::puzzle::puzzle_models::sample_puzzle;

    fn token() -> AccessToken {
        AccessToken::new("test-token")
    }

    #[tokio::test]
    async fn test_write_then_read_round_trip() {
        let store = InMemoryPuzzleStore::new();
        store.put(&token(), PuzzleId(5), &sample_puzzle()).await.unwrap();

        let raw = store.get_raw(&token(), PuzzleId(5)).await.unwrap();
        let parsed: Puzzle = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, sample_puzzle());
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = InMemoryPuzzleStore::new();
        let mut other = sample_puzzle();
        other.link = "Dark".to_string();

        store.put(&token(), PuzzleId(5), &other).await.unwrap();
        store.put(&token(), PuzzleId(5), &sample_puzzle()).await.unwrap();
        store.put(&token(), PuzzleId(5), &sample_puzzle()).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.write_count(), 3);
        let raw = store.get_raw(&token(), PuzzleId(5)).await.unwrap();
        assert_eq!(raw, serde_json::to_string(&sample_puzzle()).unwrap());
    }

    #[tokio::test]
    async fn test_missing_is_not_found() {
        let store = InMemoryPuzzleStore::new();
        assert!(matches!(
            store.get_raw(&token(), PuzzleId(9)).await,
            Err(StoreError::NotFound(PuzzleId(9)))
        ));
    }

    #[tokio::test]
    async fn test_raw_documents_returned_verbatim() {
        let store = InMemoryPuzzleStore::new();
        store.insert_raw(PuzzleId(1), r#"{ "link" : "odd spacing" }"#);
        assert_eq!(
            store.get_raw(&token(), PuzzleId(1)).await.unwrap(),
            r#"{ "link" : "odd spacing" }"#
        );
    }
}
