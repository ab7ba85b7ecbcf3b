// Handler layer - the two entry points invoked by the hosting platform.

#[path = "handler_error.rs"]
pub mod handler_error;

#[path = "response.rs"]
pub mod response;

#[path = "generate_and_store.rs"]
pub mod generate_and_store;

#[path = "get_daily_puzzle.rs"]
pub mod get_daily_puzzle;

#[cfg(test)]
#[path = "test_support.rs"]
pub(crate) mod test_support;

pub use handler_error::HandlerError;
pub use generate_and_store::GeneratePuzzleHandler;
pub use get_daily_puzzle::GetDailyPuzzleHandler;
pub use response::HandlerResponse;
