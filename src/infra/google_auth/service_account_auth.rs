// =============================================================================
// SERVICE ACCOUNT AUTHENTICATION
// =============================================================================
//
// Mints a short-lived OAuth2 access token from a Google service account using
// the JWT-bearer grant (RFC 7523):
//
// 1. Build the claim set (iss/sub = service account email, aud = token URI,
//    iat = now, exp = now + 1h, scope = requested scope)
// 2. Sign it with the account's RSA private key (RS256)
// 3. POST the assertion to the token endpoint as a form
// 4. Read `access_token` from the JSON reply
//
// Tokens are not cached. Each handler invocation is a fresh process on the
// hosting platform, so there is nothing to reuse between calls.

use crate::config::FirebaseConfig;
use crate::core::auth::{AccessToken, AuthError, TokenProvider};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const TOKEN_LIFETIME_SECS: i64 = 3600;

/// JWT claims for Google OAuth2.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub(crate) struct JwtClaims {
    /// Issuer (service account email).
    pub iss: String,

    /// Subject (also the service account email).
    pub sub: String,

    /// Audience (token endpoint).
    pub aud: String,

    /// Issued at (Unix timestamp).
    pub iat: i64,

    /// Expiration (Unix timestamp, 1 hour from iat).
    pub exp: i64,

    /// Scope (what APIs we want access to).
    pub scope: String,
}

impl JwtClaims {
    pub(crate) fn new(
        client_email: &str,
        token_uri: &str,
        scope: &str,
        now: DateTime<Utc>,
    ) -> Self {
        let iat = now.timestamp();
        Self {
            iss: client_email.to_string(),
            sub: client_email.to_string(),
            aud: token_uri.to_string(),
            iat,
            exp: iat + TOKEN_LIFETIME_SECS,
            scope: scope.to_string(),
        }
    }
}

/// Response from Google's token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// Authenticator that handles OAuth2 with service account credentials.
pub struct ServiceAccountAuth {
    client: Client,
    client_email: String,
    private_key: String,
    token_uri: String,
}

impl ServiceAccountAuth {
    pub fn new(client: Client, config: &FirebaseConfig) -> Self {
        Self {
            client,
            client_email: config.client_email.clone(),
            private_key: config.private_key.clone(),
            token_uri: config.token_uri.clone(),
        }
    }

    /// Loads the RSA key, failing before any network traffic if it is unusable.
    fn encoding_key(&self) -> Result<EncodingKey, AuthError> {
        if !self.private_key.contains("-----BEGIN") {
            return Err(AuthError::InvalidKey(
                "expected a PEM block; check that `\\n` sequences were unescaped".to_string(),
            ));
        }

        EncodingKey::from_rsa_pem(self.private_key.as_bytes())
            .map_err(|e| AuthError::InvalidKey(e.to_string()))
    }

    /// Produces the compact signed assertion for `scope`.
    pub(crate) fn sign_assertion(
        &self,
        scope: &str,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let key = self.encoding_key()?;
        let claims = JwtClaims::new(&self.client_email, &self.token_uri, scope, now);

        encode(&Header::new(Algorithm::RS256), &claims, &key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }
}

/// Pulls the token out of the endpoint's JSON reply.
fn parse_token_response(body: &str) -> Result<AccessToken, AuthError> {
    let parsed: TokenResponse =
        serde_json::from_str(body).map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

    match parsed.access_token {
        Some(token) if !token.trim().is_empty() => Ok(AccessToken::new(token)),
        _ => Err(AuthError::MalformedResponse(
            "response has no access_token".to_string(),
        )),
    }
}

#[async_trait]
impl TokenProvider for ServiceAccountAuth {
    async fn access_token(&self, scope: &str) -> Result<AccessToken, AuthError> {
        let assertion = self.sign_assertion(scope, Utc::now())?;

        tracing::debug!(
            client_email = %self.client_email,
            token_uri = %self.token_uri,
            "Exchanging service account assertion for access token"
        );

        let response = self
            .client
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), %body, "Token exchange failed");
            return Err(AuthError::TokenEndpoint {
                status: status.as_u16(),
                body,
            });
        }

        parse_token_response(&body)
    }
}
