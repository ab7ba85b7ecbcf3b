pub mod service_account_auth;

pub use service_account_auth::ServiceAccountAuth;
