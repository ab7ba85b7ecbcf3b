// LinkLoom daily puzzle handlers.
//
// **Architecture Overview:**
// - `core/` = Puzzle domain and the traits the handlers depend on
// - `infra/` = Implementations of core traits (Gemini, Google OAuth, Firestore)
// - `handlers/` = The two serverless entry points
// - `config` = Typed configuration loaded from the environment
//
// The binaries in `src/bin/` load configuration, run one handler invocation
// and print the platform response.

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with several mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
pub mod core;
#[path = "handlers/handlers_layer.rs"]
pub mod handlers;
#[path = "infra/infra_layer.rs"]
pub mod infra;

pub mod config;

/// Sets up `tracing` output for a binary. Honours `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr so stdout carries only the handler response.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
