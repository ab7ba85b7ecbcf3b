// Per-request entry point: fetch today's puzzle for the game client.
//
// Runs a single invocation and writes the platform response
// (`statusCode`/`headers`/`body`) to stdout as JSON.

use linkloom_daily::config::FetchConfig;
use linkloom_daily::handlers::{get_daily_puzzle, GetDailyPuzzleHandler, HandlerError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();
    linkloom_daily::init_logging();

    let response = match FetchConfig::from_env()
        .map_err(HandlerError::from)
        .and_then(|config| GetDailyPuzzleHandler::from_config(&config))
    {
        Ok(handler) => handler.handle().await,
        Err(e) => {
            tracing::error!("Failed to start puzzle retrieval: {}", e);
            get_daily_puzzle::failure_response(&e)
        }
    };

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
