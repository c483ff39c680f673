//! Single-shot AI endpoints: each forwards a JSON payload into a fixed
//! prompt and returns the completion, plus the lead-capture stub.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::api::{ChatMessage, OpenAiApi};
use crate::error::ApiError;
use crate::prompts;
use crate::router::AppState;

async fn completion_for(
    state: &AppState,
    system: &str,
    user: String,
    temperature: Option<f32>,
) -> Result<String, ApiError> {
    let messages = [ChatMessage::system(system), ChatMessage::user(user)];
    OpenAiApi::complete(&state.client, &messages, temperature).await
}

/// `POST /api/ai/pricing`. The payload is serialized into the pricing prompt.
pub async fn pricing(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let estimate =
        completion_for(&state, prompts::PRICING_SYSTEM, body.to_string(), None).await?;
    Ok(Json(json!({ "estimate": estimate })))
}

#[derive(Debug, Deserialize)]
pub struct SeoAuditBody {
    url: String,
}

/// `POST /api/ai/seo-audit`
pub async fn seo_audit(
    State(state): State<AppState>,
    Json(body): Json<SeoAuditBody>,
) -> Result<Json<Value>, ApiError> {
    let audit = completion_for(
        &state,
        prompts::SEO_AUDIT_SYSTEM,
        format!("Audit this website: {}", body.url),
        None,
    )
    .await?;
    Ok(Json(json!({ "audit": audit })))
}

#[derive(Debug, Deserialize)]
pub struct RecommendationBody {
    business: String,
    goal: String,
}

/// `POST /api/ai/recommendation`. The model must answer with strict JSON;
/// a parse failure surfaces as a 500, with no repair attempt.
pub async fn recommendation(
    State(state): State<AppState>,
    Json(body): Json<RecommendationBody>,
) -> Result<Json<Value>, ApiError> {
    let text = completion_for(
        &state,
        prompts::RECOMMENDATION_SYSTEM,
        prompts::recommendation_prompt(&body.business, &body.goal),
        Some(0.4),
    )
    .await?;
    let data: Value = serde_json::from_str(&text).map_err(|_| ApiError::ModelParse)?;
    Ok(Json(data))
}

#[derive(Debug, Deserialize)]
pub struct EmailReplyBody {
    email: String,
    messages: Value,
}

/// `POST /api/ai/email-reply`. Drafts a reply and logs it.
/// TODO: wire the draft into the SMTP mailer instead of only logging it.
pub async fn email_reply(
    State(state): State<AppState>,
    Json(body): Json<EmailReplyBody>,
) -> Result<Json<Value>, ApiError> {
    let reply = completion_for(
        &state,
        prompts::EMAIL_REPLY_SYSTEM,
        body.messages.to_string(),
        None,
    )
    .await?;
    info!(to = %body.email, body = %reply, "drafted inquiry reply");
    Ok(Json(json!({ "success": true })))
}

/// `POST /api/ai/contact`. Summarizes a client requirement form.
pub async fn summarize_inquiry(
    State(state): State<AppState>,
    Json(form): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let summary = completion_for(
        &state,
        prompts::INQUIRY_SUMMARY_SYSTEM,
        form.to_string(),
        None,
    )
    .await?;
    Ok(Json(json!({ "summary": summary })))
}

#[derive(Debug, Deserialize)]
pub struct LeadBody {
    email: String,
    #[serde(default)]
    messages: Vec<ChatMessage>,
    #[serde(default)]
    page: Option<String>,
}

/// `POST /api/lead`. Assembles a lead from the tail of the conversation and
/// logs it. No CRM integration behind this.
pub async fn capture_lead(Json(body): Json<LeadBody>) -> Json<Value> {
    let summary = body
        .messages
        .iter()
        .rev()
        .take(3)
        .rev()
        .map(|m| m.content.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    info!(
        email = %body.email,
        page = %body.page.unwrap_or_default(),
        summary = %summary,
        "new CRM lead"
    );
    Json(json!({ "success": true }))
}
