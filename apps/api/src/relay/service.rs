//! The relay: render → one completion call → sanitize → parse.
//!
//! Every failure is terminal for the invocation. Nothing is retried.

use std::time::Duration;

use serde_json::Value;
use tracing::{info, warn, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, truncate_chars, LlmClient, MAX_DIAGNOSTIC_CHARS};
use crate::relay::payload::RequestPayload;
use crate::relay::templates::PromptTemplate;

/// Substituted when the completion carries no text at all.
const EMPTY_COMPLETION: &str = "{}";

/// Runs one relay invocation for `template` and returns the parsed model output.
///
/// `timeout` replaces the template's own deadline when given.
pub async fn relay(
    llm: &LlmClient,
    template: PromptTemplate,
    payload: &RequestPayload,
    timeout: Option<Duration>,
) -> Result<Value, AppError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("relay", %request_id, template = template.slug());

    async move {
        let request = template.completion_request(payload);

        if !llm.has_api_key() {
            return Err(AppError::MissingConfiguration("OPENAI_API_KEY"));
        }

        let deadline = timeout.unwrap_or(template.settings().timeout);
        info!(
            "Sending completion request (model: {}, deadline: {}ms)",
            request.model,
            deadline.as_millis()
        );

        let completion = llm.complete(&request, deadline).await?;

        let text = completion
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| {
                warn!("Completion carried no text, substituting {EMPTY_COMPLETION}");
                EMPTY_COMPLETION
            });

        let parsed = parse_completion_text(text)?;
        info!("Relay succeeded");
        Ok(parsed)
    }
    .instrument(span)
    .await
}

/// Strips optional fences and parses the rest as JSON.
/// Unparsable text is reported, never passed through.
pub fn parse_completion_text(text: &str) -> Result<Value, AppError> {
    let sanitized = strip_json_fences(text);
    serde_json::from_str(sanitized).map_err(|e| {
        AppError::BadUpstreamJson(format!(
            "{e}; text: {}",
            truncate_chars(sanitized, MAX_DIAGNOSTIC_CHARS)
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_fenced_object() {
        let value = parse_completion_text("```json\n{\"a\":1}\n```").unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_parse_bare_array() {
        let value = parse_completion_text("[{\"name\":\"x\"}]").unwrap();
        assert_eq!(value, json!([{"name": "x"}]));
    }

    #[test]
    fn test_parse_rejects_prose() {
        let err = parse_completion_text("not json").unwrap_err();
        assert!(matches!(err, AppError::BadUpstreamJson(_)));
    }

    #[test]
    fn test_parse_rejects_trailing_commentary() {
        let err = parse_completion_text("{\"a\":1}\nHope this helps!").unwrap_err();
        assert!(matches!(err, AppError::BadUpstreamJson(_)));
    }

    #[test]
    fn test_empty_completion_placeholder_parses_to_empty_object() {
        assert_eq!(parse_completion_text(EMPTY_COMPLETION).unwrap(), json!({}));
    }

    #[tokio::test]
    async fn test_relay_without_key_reports_missing_configuration() {
        let llm = LlmClient::new(None, "http://127.0.0.1:1/v1/chat/completions".to_string());
        let err = relay(
            &llm,
            PromptTemplate::Ideas,
            &RequestPayload::default(),
            None,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::MissingConfiguration(_)));
    }

    #[tokio::test]
    async fn test_relay_transport_failure_is_upstream_error() {
        // Nothing listens on port 1.
        let llm = LlmClient::new(
            Some("sk-test".to_string()),
            "http://127.0.0.1:1/v1/chat/completions".to_string(),
        );
        let err = relay(
            &llm,
            PromptTemplate::Ideas,
            &RequestPayload::default(),
            Some(Duration::from_secs(2)),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
    }
}
