pub mod auth;
pub mod chat_request;

pub use auth::AdminAuth;
pub use chat_request::{ChatContext, ChatPreprocess};
