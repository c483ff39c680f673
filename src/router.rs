use axum::routing::{get, post};
use axum::Router;

use crate::db::Storage;
use crate::handlers::{admin, assist, chat, contact};

#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            client: reqwest::Client::new(),
        }
    }
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/contact", post(contact::submit))
        .route("/api/lead", post(assist::capture_lead))
        .route("/api/ai/chat", post(chat::relay))
        .route("/api/ai/pricing", post(assist::pricing))
        .route("/api/ai/seo-audit", post(assist::seo_audit))
        .route("/api/ai/recommendation", post(assist::recommendation))
        .route("/api/ai/email-reply", post(assist::email_reply))
        .route("/api/ai/contact", post(assist::summarize_inquiry))
        .route("/api/admin/login", post(admin::login))
        .route("/api/admin/contacts", get(admin::list_contacts))
        .route(
            "/api/admin/email-settings",
            get(admin::get_email_settings).post(admin::update_email_settings),
        )
        .with_state(state)
}
