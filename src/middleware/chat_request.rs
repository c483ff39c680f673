use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::api::ChatMessage;

#[derive(Debug, Deserialize)]
struct ChatBody {
    messages: Vec<ChatMessage>,
    #[serde(default)]
    page: Option<String>,
}

/// Page path the chat widget reports, used to key system-prompt guidance.
#[derive(Debug, Clone)]
pub struct ChatContext {
    pub page: String,
}

/// Validated chat-relay request: the conversation so far plus its context.
pub struct ChatPreprocess(pub Vec<ChatMessage>, pub ChatContext);

impl<S> FromRequest<S> for ChatPreprocess
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = match Json::<ChatBody>::from_request(req, state).await {
            Ok(v) => v,
            Err(rejection) => return Err(rejection.into_response()),
        };

        if body.messages.is_empty() {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "messages must not be empty" })),
            )
                .into_response());
        }

        let ctx = ChatContext {
            page: body.page.unwrap_or_default(),
        };
        Ok(ChatPreprocess(body.messages, ctx))
    }
}
