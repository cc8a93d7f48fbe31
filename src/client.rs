//! The remote-model call boundary.
//!
//! [`ModelTransport`] is the single seam between the analyzer and the
//! outside world, so a test double can stand in for the Gemini API without
//! touching calling code.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Result, SenseiError};

const GEMINI_API_TIMEOUT: u64 = 30;

/// Capability to send a prompt to a remote model and get text back
#[async_trait]
pub trait ModelTransport: Send + Sync {
    /// Whether a credential is configured; when false, callers must not
    /// attempt [`ModelTransport::send`]
    fn is_available(&self) -> bool;

    /// Sends a prompt and returns the model's raw text reply unmodified
    async fn send(&self, prompt: &str) -> Result<String>;
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ReplyContent,
}

#[derive(Deserialize)]
struct ReplyContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Deserialize)]
struct ReplyPart {
    text: String,
}

/// HTTP client for the Gemini generateContent API
pub struct GeminiClient {
    client: Client,
    config: Config,
}

impl GeminiClient {
    /// Creates a client from the given configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(GEMINI_API_TIMEOUT))
            .build()
            .map_err(|e| SenseiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl ModelTransport for GeminiClient {
    fn is_available(&self) -> bool {
        self.config.is_configured()
    }

    async fn send(&self, prompt: &str) -> Result<String> {
        let key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| SenseiError::Config("GEMINI_API_KEY is not set".into()))?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.endpoint, self.config.model, key
        );

        debug!("sending {} byte prompt to {}", prompt.len(), self.config.model);

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SenseiError::Llm(format!("Gemini API returned {status}")));
        }

        let reply: GenerateResponse = response.json().await?;
        reply
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| SenseiError::Llm("Gemini reply contained no candidates".into()))
    }
}
