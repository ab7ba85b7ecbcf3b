// Per-request handler: return today's stored puzzle.
//
// Derivation -> Authenticator -> Reader. The stored JSON string is passed
// through as the body without re-parsing.

use super::handler_error::HandlerError;
use super::response::HandlerResponse;
use crate::config::FetchConfig;
use crate::core::auth::{TokenProvider, DATASTORE_SCOPE};
use crate::core::puzzle::{Clock, PuzzleId, PuzzleStore, SystemClock};
use crate::infra::build_http_client;
use crate::infra::firestore::FirestorePuzzleStore;
use crate::infra::google_auth::ServiceAccountAuth;
use std::sync::Arc;

const NOT_FOUND_MESSAGE: &str = "Could not find today's puzzle.";

pub struct GetDailyPuzzleHandler {
    clock: Arc<dyn Clock>,
    auth: Arc<dyn TokenProvider>,
    store: Arc<dyn PuzzleStore>,
}

impl GetDailyPuzzleHandler {
    pub fn new(
        clock: Arc<dyn Clock>,
        auth: Arc<dyn TokenProvider>,
        store: Arc<dyn PuzzleStore>,
    ) -> Self {
        Self { clock, auth, store }
    }

    /// Reads are never retried; a miss is the normal state before the daily job runs.
    pub fn from_config(config: &FetchConfig) -> Result<Self, HandlerError> {
        let client = build_http_client(&config.http)?;

        Ok(Self::new(
            Arc::new(SystemClock),
            Arc::new(ServiceAccountAuth::new(client.clone(), &config.firebase)),
            Arc::new(FirestorePuzzleStore::new(
                client,
                &config.firebase,
                config.http.retry,
            )),
        ))
    }

    pub async fn handle(&self) -> HandlerResponse {
        match self.run().await {
            Ok(body) => HandlerResponse::raw_json(200, body),
            Err(e) => {
                tracing::error!("Error fetching puzzle: {}", e);
                failure_response(&e)
            }
        }
    }

    async fn run(&self) -> Result<String, HandlerError> {
        let id = PuzzleId::today(self.clock.as_ref());
        tracing::debug!(puzzle_id = %id, "Fetching daily puzzle");

        let token = self.auth.access_token(DATASTORE_SCOPE).await?;
        Ok(self.store.get_raw(&token, id).await?)
    }
}

/// Store failures of any kind read as "not found" to the client; failures
/// before the store is reached are server errors.
pub fn failure_response(error: &HandlerError) -> HandlerResponse {
    match error {
        HandlerError::Store(_) => HandlerResponse::error_envelope(404, NOT_FOUND_MESSAGE),
        HandlerError::Auth(_) => HandlerResponse::error_envelope(500, "Authentication failed."),
        _ => HandlerResponse::error_envelope(500, "Server is missing configuration."),
    }
}
