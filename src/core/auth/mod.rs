pub mod token_provider;

pub use token_provider::{AccessToken, AuthError, TokenProvider, DATASTORE_SCOPE};
