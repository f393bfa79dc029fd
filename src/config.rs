use std::env;

/// Application-level constants
pub const APP_NAME: &str = "Medcompare";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default model for the comparison pass.
pub const DEFAULT_MODEL: &str = "gpt-4-turbo";

/// Default OpenAI-compatible endpoint.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Timeout for one model request. One request per comparison, no retries
/// here — retry policy belongs to the caller.
pub const MODEL_TIMEOUT_SECS: u64 = 120;

/// Default port for the comparison API server.
pub const DEFAULT_PORT: u16 = 3000;

pub fn default_log_filter() -> &'static str {
    "info,medcompare=debug"
}

/// API key for the model endpoint. `None` when unset or empty, in which
/// case the engine falls back to rule-based comparison only.
pub fn openai_api_key() -> Option<String> {
    env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty())
}

pub fn openai_base_url() -> String {
    env::var("OPENAI_BASE_URL")
        .ok()
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string())
}

pub fn model_name() -> String {
    env::var("MEDCOMPARE_MODEL")
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

pub fn port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
