//! LLM client: the single point of entry for chat completion calls in Launchpad.
//!
//! No other module may talk to the completion endpoint directly.
//! Each call is a single attempt: there is no retry loop, and every call is
//! bounded by a caller-supplied deadline.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

/// Upstream bodies are cut to this many characters before they reach a log line.
pub const MAX_DIAGNOSTIC_CHARS: usize = 500;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("completion API key is not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("completion call exceeded {after:?}")]
    Timeout { after: Duration },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: &'static str,
}

impl ResponseFormat {
    pub const JSON_OBJECT: ResponseFormat = ResponseFormat {
        format_type: "json_object",
    };
}

/// Body of a chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
}

impl CompletionResponse {
    /// Text content of the first candidate, if there is one.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Chat completion client shared by every relay invocation.
/// Cloning is cheap: the underlying connection pool is reference counted.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
}

impl LlmClient {
    pub fn new(api_key: Option<String>, endpoint: String) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            endpoint,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one completion request and waits at most `deadline` for the full
    /// response body. On expiry the request future is dropped, which closes
    /// the in-flight connection.
    pub async fn complete(
        &self,
        request: &CompletionRequest,
        deadline: Duration,
    ) -> Result<CompletionResponse, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let exchange = async {
            let response = self
                .client
                .post(&self.endpoint)
                .bearer_auth(api_key)
                .json(request)
                .send()
                .await?;

            let status = response.status();
            let body = response.text().await?;

            if !status.is_success() {
                let message = serde_json::from_str::<ApiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                warn!(
                    "Completion API returned {}: {}",
                    status,
                    truncate_chars(&message, MAX_DIAGNOSTIC_CHARS)
                );
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message: truncate_chars(&message, MAX_DIAGNOSTIC_CHARS).to_string(),
                });
            }

            let completion: CompletionResponse = serde_json::from_str(&body)?;
            Ok::<_, LlmError>(completion)
        };

        let completion = tokio::time::timeout(deadline, exchange)
            .await
            .map_err(|_| LlmError::Timeout { after: deadline })??;

        if let Some(usage) = &completion.usage {
            debug!(
                "Completion succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(completion)
    }
}

/// Strips a Markdown code fence wrapped around model output.
///
/// The opening fence may carry a language tag (```json, ```JSON, ```js).
/// A missing closing fence is tolerated. Text without an opening fence is
/// only trimmed.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    let tag_len = rest
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    let (tag, after) = rest.split_at(tag_len);
    // A bare word glued to the closing fence is content, not a tag.
    let body = if tag.eq_ignore_ascii_case("json") || after.starts_with(char::is_whitespace) {
        after
    } else {
        rest
    };
    let body = body.trim_start();

    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Cuts `text` to at most `max` characters on a char boundary.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
