// The infra module contains implementations of core traits.
// Each external service gets its own submodule.

#[path = "ai/mod.rs"]
pub mod ai;

#[path = "google_auth/mod.rs"]
pub mod google_auth;

#[path = "firestore/mod.rs"]
pub mod firestore;

#[path = "memory/mod.rs"]
pub mod memory;

#[cfg(test)]
#[path = "test_server.rs"]
pub(crate) mod test_server;

use crate::config::HttpConfig;
use reqwest::Client;

const USER_AGENT: &str = concat!("LinkLoomDaily/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for every outbound call in one invocation.
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.timeout)
        .build()
}
