use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Default chat completion endpoint.
pub const DEFAULT_COMPLETION_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Hard execution deadline of the hosting platform. Client-side timeouts
/// must finish strictly before it.
pub const PLATFORM_DEADLINE: Duration = Duration::from_secs(10);

/// Application configuration loaded from environment variables.
/// The completion API key is optional here: its absence is reported per request.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub completion_url: String,
    /// Replaces every template's own timeout when set.
    pub upstream_timeout: Option<Duration>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let upstream_timeout = match optional_env("UPSTREAM_TIMEOUT_MS") {
            Some(raw) => Some(parse_timeout_ms(&raw)?),
            None => None,
        };

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            completion_url: optional_env("COMPLETION_URL")
                .unwrap_or_else(|| DEFAULT_COMPLETION_URL.to_string()),
            upstream_timeout,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads a variable, treating unset and blank values alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_timeout_ms(raw: &str) -> Result<Duration> {
    let ms = raw
        .parse::<u64>()
        .with_context(|| format!("UPSTREAM_TIMEOUT_MS must be a number of milliseconds, got '{raw}'"))?;
    let timeout = Duration::from_millis(ms);
    if timeout.is_zero() || timeout >= PLATFORM_DEADLINE {
        bail!(
            "UPSTREAM_TIMEOUT_MS must be between 1 and {} ms",
            PLATFORM_DEADLINE.as_millis() - 1
        );
    }
    Ok(timeout)
}
