// The core module contains the puzzle domain and the contracts the handlers
// depend on. Nothing here talks to the network.

#[path = "puzzle/mod.rs"]
pub mod puzzle;

#[path = "auth/mod.rs"]
pub mod auth;

#[path = "retry.rs"]
pub mod retry;
