//! Chat-completion wire types and HTTP client.
//!
//! [`CompletionService`] is the seam between the translator and the remote
//! model: the production implementation is [`OpenAiClient`], a thin
//! `reqwest` wrapper around the `/chat/completions` endpoint. The client is
//! stateless and meant to be constructed once at process start and reused.

use crate::config::{API_KEY_ENV, DEFAULT_API_BASE_URL};
use crate::error::{TranslateError, TranslateResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Role used for the single prompt message.
pub const SYSTEM_ROLE: &str = "system";

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Create a system-role message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: SYSTEM_ROLE.to_string(),
            content: content.into(),
        }
    }
}

/// Request body for a chat-completion call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Create a request carrying one system-role message.
    pub fn system_prompt(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::system(prompt)],
        }
    }
}

/// Message inside a completion choice. Content may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

/// Response body from a chat-completion call. Only the fields the translator
/// consumes are modeled; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

impl ChatResponse {
    /// Content of the first choice, if present and non-empty.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
            .filter(|content| !content.is_empty())
    }
}

/// A remote text-completion service.
///
/// The host integration supplies an implementation; tests substitute fakes.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send one completion request and return the parsed response.
    async fn complete(&self, request: ChatRequest) -> TranslateResult<ChatResponse>;
}

/// `reqwest`-backed client for an OpenAI-compatible completion endpoint.
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    /// Contains sensitive data - never log
    api_key: String,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Create a client with an explicit API key and the default base URL.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Create a client reading the API key from the process environment.
    pub fn from_env() -> TranslateResult<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            TranslateError::configuration(format!("{} is not set", API_KEY_ENV))
        })?;
        Ok(Self::new(api_key))
    }

    /// Override the endpoint base URL (e.g. for a compatible local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl CompletionService for OpenAiClient {
    async fn complete(&self, request: ChatRequest) -> TranslateResult<ChatResponse> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let response = response.error_for_status()?;
        Ok(response.json::<ChatResponse>().await?)
    }
}
