//! OpenAI-compatible chat-completions client.
//!
//! Blocking reqwest client; the async HTTP surface wraps calls in
//! `spawn_blocking`. Works against any endpoint speaking the
//! `/v1/chat/completions` protocol, so a self-hosted gateway can stand in
//! for the hosted API via `OPENAI_BASE_URL`.

use serde::{Deserialize, Serialize};

use crate::config;

use super::orchestrator::ChatModel;
use super::CompareError;

pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl OpenAiClient {
    pub fn new(base_url: &str, api_key: String, model: String, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            client,
            timeout_secs,
        }
    }

    /// Build a client from the environment.
    ///
    /// Requires `OPENAI_API_KEY`; base URL and model name fall back to the
    /// configured defaults.
    pub fn from_env() -> Result<Self, CompareError> {
        let api_key = config::openai_api_key().ok_or(CompareError::MissingApiKey)?;
        Ok(Self::new(
            &config::openai_base_url(),
            api_key,
            config::model_name(),
            config::MODEL_TIMEOUT_SECS,
        ))
    }

    /// The model name requests are issued against.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatModel for OpenAiClient {
    fn complete(&self, system: &str, user: &str) -> Result<String, CompareError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            // Low temperature: the response must follow a JSON schema, not be creative.
            temperature: 0.3,
            max_tokens: 1024,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    CompareError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    CompareError::HttpClient(format!(
                        "Request timed out after {}s",
                        self.timeout_secs
                    ))
                } else {
                    CompareError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(CompareError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| CompareError::MalformedResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(CompareError::EmptyResponse)
    }
}
