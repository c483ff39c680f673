use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::error;

use crate::db::NewContact;
use crate::error::ApiError;
use crate::mail;
use crate::router::AppState;

/// Minimal shape check: `local@domain.tld`, no whitespace.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
        && !domain.contains('@')
}

/// `POST /api/contact`
///
/// Persists the submission, then spawns both notification emails without
/// awaiting them: the 201 is independent of mail-provider availability.
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<NewContact>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if form.name.trim().is_empty() || form.email.trim().is_empty() || form.message.trim().is_empty()
    {
        return Err(ApiError::Validation(
            "Name, email, and message are required".to_string(),
        ));
    }
    if !is_valid_email(&form.email) {
        return Err(ApiError::Validation("Invalid email address".to_string()));
    }

    let id = state.storage.insert_contact(&form).await?;

    {
        let storage = state.storage.clone();
        let form = form.clone();
        tokio::spawn(async move {
            if let Err(e) = mail::send_contact_notification(&storage, &form).await {
                error!(error = %e, "failed to send notification email");
            }
        });
    }
    {
        let storage = state.storage.clone();
        let (email, name) = (form.email.clone(), form.name.clone());
        tokio::spawn(async move {
            if let Err(e) = mail::send_contact_confirmation(&storage, &email, &name).await {
                error!(error = %e, "failed to send confirmation email");
            }
        });
    }

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Contact form submitted successfully",
            "id": id,
        })),
    ))
}
