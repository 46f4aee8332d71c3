use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only for the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        Self {
            llm: LlmClient::new(config.openai_api_key.clone(), config.completion_url.clone()),
            config,
        }
    }
}
