//! Axum route handlers for the relay.

use axum::{
    extract::{rejection::BytesRejection, Path, State},
    http::Method,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::relay::payload::RequestPayload;
use crate::relay::service::relay;
use crate::relay::templates::PromptTemplate;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TemplateInfo {
    pub slug: &'static str,
    pub model: &'static str,
    pub temperature: f32,
    pub json_mode: bool,
    pub max_tokens: Option<u32>,
    pub timeout_ms: u64,
}

impl From<PromptTemplate> for TemplateInfo {
    fn from(template: PromptTemplate) -> Self {
        let settings = template.settings();
        Self {
            slug: template.slug(),
            model: settings.model,
            temperature: settings.temperature,
            json_mode: settings.json_mode,
            max_tokens: settings.max_tokens,
            timeout_ms: settings.timeout.as_millis() as u64,
        }
    }
}

/// ANY /api/v1/generate/:template
///
/// Only POST is served. The body is optional: a missing or malformed body
/// renders the template with empty fields. A body that cannot be buffered
/// (over the size limit) is reported after the method check.
pub async fn handle_generate(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, AppError> {
    ensure_post(&method)?;
    let template = PromptTemplate::from_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Unknown template '{slug}'")))?;
    run(&state, template, &body?).await
}

/// ANY /api/generate-{slug}
///
/// Fixed-template variant of `handle_generate`, one route per registry entry.
pub async fn handle_generate_fixed(
    state: AppState,
    template: PromptTemplate,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, AppError> {
    ensure_post(&method)?;
    run(&state, template, &body?).await
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateInfo>> {
    Json(PromptTemplate::ALL.into_iter().map(TemplateInfo::from).collect())
}

fn ensure_post(method: &Method) -> Result<(), AppError> {
    if method == Method::POST {
        Ok(())
    } else {
        Err(AppError::MethodNotAllowed(method.to_string()))
    }
}

async fn run(state: &AppState, template: PromptTemplate, body: &[u8]) -> Result<Json<Value>, AppError> {
    let payload = RequestPayload::from_body(body);
    let value = relay(&state.llm, template, &payload, state.config.upstream_timeout).await?;
    Ok(Json(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_post() {
        assert!(ensure_post(&Method::POST).is_ok());
        for method in [Method::GET, Method::PUT, Method::DELETE, Method::OPTIONS] {
            assert!(matches!(
                ensure_post(&method),
                Err(AppError::MethodNotAllowed(_))
            ));
        }
    }

    #[test]
    fn test_template_info_reports_settings() {
        let info = TemplateInfo::from(PromptTemplate::FullPlan);
        assert_eq!(info.slug, "full-plan");
        assert_eq!(info.timeout_ms, 7500);
        assert!(info.json_mode);
    }
}
