use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth;
use crate::config::CONFIG;
use crate::db::EmailSettings;
use crate::error::ApiError;
use crate::middleware::AdminAuth;
use crate::router::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    email: String,
    password: String,
}

/// `POST /api/admin/login`. Verifies credentials and mints a 7-day bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<Value>, ApiError> {
    if body.email.is_empty() || body.password.is_empty() {
        return Err(ApiError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let Some(admin) = state.storage.get_admin_by_email(&body.email).await? else {
        return Err(ApiError::Unauthorized("Invalid credentials"));
    };
    if !auth::verify_password(&body.password, &admin.password_hash, &admin.salt) {
        return Err(ApiError::Unauthorized("Invalid credentials"));
    }

    let token = auth::generate_token(admin.id, &admin.email)?;
    Ok(Json(json!({ "success": true, "token": token })))
}

#[derive(Debug, Deserialize)]
pub struct ContactsQuery {
    limit: Option<i64>,
    skip: Option<i64>,
    search: Option<String>,
}

/// `GET /api/admin/contacts?limit&skip&search`
pub async fn list_contacts(
    AdminAuth(_claims): AdminAuth,
    State(state): State<AppState>,
    Query(query): Query<ContactsQuery>,
) -> Result<Json<Value>, ApiError> {
    // Page size is capped; the admin UI never asks for more than 100.
    let limit = query.limit.unwrap_or(20).clamp(0, 100);
    let skip = query.skip.unwrap_or(0).max(0);
    let search = query.search.unwrap_or_default();

    let contacts = state.storage.list_contacts(limit, skip, &search).await?;
    let total = state.storage.count_contacts(&search).await?;

    Ok(Json(json!({
        "contacts": contacts,
        "total": total,
        "limit": limit,
        "skip": skip,
        "hasMore": skip.saturating_add(limit) < total,
    })))
}

/// `GET /api/admin/email-settings`
///
/// Returns the stored row, or the environment fallback when none exists.
/// The password is always blanked: it is write-only from the client side.
pub async fn get_email_settings(
    AdminAuth(_claims): AdminAuth,
    State(state): State<AppState>,
) -> Result<Json<EmailSettings>, ApiError> {
    let settings = match state.storage.get_email_settings().await? {
        Some(s) => s,
        None => EmailSettings {
            smtp_host: CONFIG.smtp_host.clone().unwrap_or_default(),
            smtp_port: CONFIG.smtp_port,
            smtp_secure: CONFIG.smtp_secure,
            smtp_user: CONFIG.smtp_user.clone().unwrap_or_default(),
            smtp_password: String::new(),
            admin_email: CONFIG.admin_email.clone().unwrap_or_default(),
        },
    };
    Ok(Json(settings.blank_password()))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailSettingsBody {
    smtp_host: String,
    /// Optional at the serde level so a missing port hits the same 400 as
    /// the other required fields instead of a deserialization rejection.
    smtp_port: Option<u16>,
    #[serde(default)]
    smtp_secure: bool,
    smtp_user: String,
    /// Blank or omitted keeps the previously stored password.
    #[serde(default)]
    smtp_password: String,
    admin_email: String,
}

/// `POST /api/admin/email-settings`. Upserts the singleton row, preserving
/// the stored password when the submitted one is blank.
pub async fn update_email_settings(
    AdminAuth(_claims): AdminAuth,
    State(state): State<AppState>,
    Json(body): Json<EmailSettingsBody>,
) -> Result<Json<Value>, ApiError> {
    const REQUIRED: &str = "Required fields: smtpHost, smtpPort, smtpUser, adminEmail";
    let Some(smtp_port) = body.smtp_port else {
        return Err(ApiError::Validation(REQUIRED.to_string()));
    };
    if body.smtp_host.is_empty() || body.smtp_user.is_empty() || body.admin_email.is_empty() {
        return Err(ApiError::Validation(REQUIRED.to_string()));
    }

    let settings = EmailSettings {
        smtp_host: body.smtp_host,
        smtp_port,
        smtp_secure: body.smtp_secure,
        smtp_user: body.smtp_user,
        smtp_password: body.smtp_password,
        admin_email: body.admin_email,
    };
    state.storage.upsert_email_settings(&settings).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Email settings updated successfully",
        "settings": settings.blank_password(),
    })))
}
