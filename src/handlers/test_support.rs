// Hand-written fakes for the core traits, shared by the handler tests.

use crate::core::auth::{AccessToken, AuthError, TokenProvider};
use crate::core::puzzle::puzzle_models::sample_puzzle;
use crate::core::puzzle::{GeneratorError, Puzzle, PuzzleGenerator, PuzzleId};
use async_trait::async_trait;
use std::sync::Mutex;

/// Returns a fixed outcome and records which IDs it was asked for.
pub struct FakeGenerator {
    outcome: fn() -> Result<Puzzle, GeneratorError>,
    pub requested: Mutex<Vec<PuzzleId>>,
}

impl FakeGenerator {
    pub fn ok() -> Self {
        Self {
            outcome: || Ok(sample_puzzle()),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(outcome: fn() -> Result<Puzzle, GeneratorError>) -> Self {
        Self {
            outcome,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<PuzzleId> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PuzzleGenerator for FakeGenerator {
    async fn generate(&self, id: PuzzleId) -> Result<Puzzle, GeneratorError> {
        self.requested.lock().unwrap().push(id);
        (self.outcome)()
    }
}

/// Token endpoint stand-in: hands out "X" or fails with a non-success status.
pub struct FakeAuth {
    fail: bool,
    pub scopes: Mutex<Vec<String>>,
}

impl FakeAuth {
    pub fn ok() -> Self {
        Self {
            fail: false,
            scopes: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            scopes: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.scopes.lock().unwrap().len()
    }
}

#[async_trait]
impl TokenProvider for FakeAuth {
    async fn access_token(&self, scope: &str) -> Result<AccessToken, AuthError> {
        self.scopes.lock().unwrap().push(scope.to_string());
        if self.fail {
            return Err(AuthError::TokenEndpoint {
                status: 401,
                body: r#"{"error":"invalid_grant"}"#.to_string(),
            });
        }
        Ok(AccessToken::new("X"))
    }
}
