use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use eventsource_stream::Eventsource;
use tokio_stream::StreamExt;
use tracing::warn;

use crate::api::{delta_text, ChatMessage, OpenAiApi};
use crate::error::ApiError;
use crate::middleware::ChatPreprocess;
use crate::prompts;
use crate::router::AppState;

/// `POST /api/ai/chat`
///
/// Prepends the system instruction, requests a token stream upstream, and
/// relays each incremental text fragment verbatim as `text/plain`. The body
/// closes when the upstream stream ends or errors; there is no retry and no
/// in-band error signaling once streaming has begun.
pub async fn relay(
    State(state): State<AppState>,
    ChatPreprocess(messages, ctx): ChatPreprocess,
) -> Result<Response, ApiError> {
    let mut conversation = Vec::with_capacity(messages.len() + 1);
    conversation.push(ChatMessage::system(prompts::chat_system_prompt(&ctx.page)));
    conversation.extend(messages);

    let upstream = OpenAiApi::post_stream(&state.client, &conversation).await?;

    let stream = upstream
        .bytes_stream()
        .eventsource()
        .map_while(|event| match event {
            Ok(ev) if ev.data.trim() == "[DONE]" => None,
            Ok(ev) => {
                let text = delta_text(&ev.data).unwrap_or_default();
                Some(Ok::<_, std::convert::Infallible>(Bytes::from(text)))
            }
            Err(e) => {
                // Upstream failure mid-stream: close the output, nothing more.
                warn!(error = %e, "upstream stream error; closing relay");
                None
            }
        });

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        Body::from_stream(stream),
    )
        .into_response())
}
