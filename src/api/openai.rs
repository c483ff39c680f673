//! Stateless client for the hosted chat-completion API (OpenAI wire format).
//!
//! Two call shapes:
//! - [`OpenAiApi::complete`]: single-shot, returns the assistant text.
//! - [`OpenAiApi::post_stream`]: `stream: true`, returns the raw upstream
//!   response whose SSE body the chat handler relays.

use serde::{Deserialize, Serialize};

use crate::config::CONFIG;
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// One SSE chunk of a streamed completion.
#[derive(Deserialize)]
struct StreamChunk {
    choices: Vec<StreamChoice>,
}

#[derive(Deserialize)]
struct StreamChoice {
    delta: Delta,
}

#[derive(Deserialize, Default)]
struct Delta {
    #[serde(default)]
    content: Option<String>,
}

pub struct OpenAiApi;

impl OpenAiApi {
    fn completions_url() -> String {
        format!("{}/chat/completions", CONFIG.openai_base_url)
    }

    fn api_key() -> Result<&'static str, ApiError> {
        CONFIG
            .openai_api_key
            .as_deref()
            .ok_or(ApiError::MissingApiKey)
    }

    async fn post(
        client: &reqwest::Client,
        messages: &[ChatMessage],
        temperature: Option<f32>,
        stream: bool,
    ) -> Result<reqwest::Response, ApiError> {
        let body = CompletionRequest {
            model: &CONFIG.openai_model,
            messages,
            temperature,
            stream: stream.then_some(true),
        };
        let resp = client
            .post(Self::completions_url())
            .bearer_auth(Self::api_key()?)
            .json(&body)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiError::UpstreamStatus(resp.status()));
        }
        Ok(resp)
    }

    /// Single-shot completion; returns the first choice's text.
    pub async fn complete(
        client: &reqwest::Client,
        messages: &[ChatMessage],
        temperature: Option<f32>,
    ) -> Result<String, ApiError> {
        let resp = Self::post(client, messages, temperature, false).await?;
        let parsed: CompletionResponse = resp.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(ApiError::EmptyCompletion)
    }

    /// Streaming completion; the caller owns the SSE body.
    pub async fn post_stream(
        client: &reqwest::Client,
        messages: &[ChatMessage],
    ) -> Result<reqwest::Response, ApiError> {
        Self::post(client, messages, None, true).await
    }
}

/// Extract the incremental text from one SSE `data:` payload.
///
/// Returns `None` for the `[DONE]` sentinel, unparsable payloads, and chunks
/// without a content delta (role preambles, finish markers).
pub fn delta_text(data: &str) -> Option<String> {
    if data.trim() == "[DONE]" {
        return None;
    }
    let chunk: StreamChunk = serde_json::from_str(data).ok()?;
    chunk.choices.into_iter().next()?.delta.content
}
