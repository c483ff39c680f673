pub mod admin;
pub mod assist;
pub mod chat;
pub mod contact;
