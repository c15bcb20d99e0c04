pub mod auth;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod users;
