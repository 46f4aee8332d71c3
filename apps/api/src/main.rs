use anyhow::Result;
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use launchpad::config::Config;
use launchpad::relay::templates::PromptTemplate;
use launchpad::routes::build_app;
use launchpad::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Launchpad API v{}", env!("CARGO_PKG_VERSION"));

    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; generate endpoints will answer 500");
    }

    let state = AppState::from_config(config.clone());
    info!("LLM client initialized (endpoint: {})", state.llm.endpoint());

    for template in PromptTemplate::ALL {
        let settings = template.settings();
        info!(
            "Template {}: model={} temperature={} timeout={}ms",
            template.slug(),
            settings.model,
            settings.temperature,
            config
                .upstream_timeout
                .unwrap_or(settings.timeout)
                .as_millis()
        );
    }

    let app = build_app(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
