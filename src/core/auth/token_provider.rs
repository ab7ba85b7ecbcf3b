use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// OAuth scope granting read/write access to the document store.
pub const DATASTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";

/// An opaque bearer token. `Debug` is redacted so it never lands in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.as_str())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid service account private key: {0}")]
    InvalidKey(String),
    #[error("Failed to sign assertion: {0}")]
    Signing(String),
    #[error("Token exchange failed ({status}): {body}")]
    TokenEndpoint { status: u16, body: String },
    #[error("Malformed token response: {0}")]
    MalformedResponse(String),
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Anything that can mint a bearer token for a scope.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self, scope: &str) -> Result<AccessToken, AuthError>;
}
