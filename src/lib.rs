pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod mail;
pub mod middleware;
pub mod prompts;
pub mod router;

pub use error::ApiError;
pub use router::AppState;
