// Scheduled entry point: generate today's puzzle and persist it.
//
// Runs a single invocation and writes the platform response
// (`statusCode`/`headers`/`body`) to stdout as JSON.

use linkloom_daily::config::GenerateConfig;
use linkloom_daily::handlers::{generate_and_store, GeneratePuzzleHandler, HandlerError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();
    linkloom_daily::init_logging();

    let response = match GenerateConfig::from_env()
        .map_err(HandlerError::from)
        .and_then(|config| GeneratePuzzleHandler::from_config(&config))
    {
        Ok(handler) => handler.handle().await,
        Err(e) => {
            tracing::error!("Failed to start puzzle generation: {}", e);
            generate_and_store::failure_response(&e)
        }
    };

    println!("{}", serde_json::to_string(&response)?);

    if !response.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
