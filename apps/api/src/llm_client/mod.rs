//! LLM Client: the single point of entry for all language-model calls in Career Compass.
//!
//! ARCHITECTURAL RULE: No other module may call the completion API directly.
//! Handlers depend on the `ChatBackend` trait; `LlmClient` is the production
//! implementation over Groq's OpenAI-compatible chat completions endpoint.
//!
//! Model: llama-3.1-8b-instant (fixed, not configurable)
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// The model used for all LLM calls.
pub const MODEL: &str = "llama-3.1-8b-instant";
const MAX_RETRIES: u32 = 2;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("No JSON found in AI response")]
    MissingJson,

    #[error("Incomplete JSON response from AI: {0}")]
    InvalidShape(String),

    #[error("LLM call timed out after {secs}s")]
    Timeout { secs: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Ask the provider for a JSON object response.
    pub json_mode: bool,
}

/// A chat-completion provider. Returns the text of the first choice.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    fn model(&self) -> &str;

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Groq chat-completions client with retry on rate limits and server errors.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
    timeout: Duration,
}

impl LlmClient {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            api_url,
            timeout,
        })
    }

    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    async fn call(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let body = ChatCompletionBody {
            model: MODEL,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: false,
            response_format: request.json_mode.then_some(ResponseFormat {
                format_type: "json_object",
            }),
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, ...
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&self.api_url)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) if e.is_timeout() => {
                    return Err(LlmError::Timeout {
                        secs: self.timeout.as_secs(),
                    })
                }
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 {
                warn!("LLM API rate limited (attempt {})", attempt + 1);
                last_error = Some(LlmError::RateLimited {
                    retries: attempt + 1,
                });
                continue;
            }

            if status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let completion: ChatCompletionResponse = response.json().await?;

            if let Some(usage) = &completion.usage {
                debug!(
                    "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                    usage.prompt_tokens, usage.completion_tokens
                );
            }

            return completion
                .choices
                .into_iter()
                .next()
                .and_then(|c| c.message.content)
                .filter(|c| !c.trim().is_empty())
                .ok_or(LlmError::EmptyContent);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl ChatBackend for LlmClient {
    fn model(&self) -> &str {
        MODEL
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.call(request).await
    }
}

/// Runs one completion bounded by `timeout`; expiry becomes `LlmError::Timeout`.
pub async fn complete_within(
    llm: &dyn ChatBackend,
    request: &CompletionRequest,
    timeout: Duration,
) -> Result<String, LlmError> {
    tokio::time::timeout(timeout, llm.complete(request))
        .await
        .map_err(|_| LlmError::Timeout {
            secs: timeout.as_secs(),
        })?
}

/// Parses model output into a JSON object. Tolerates code fences and prose
/// around the object by falling back to the outermost `{...}` slice.
pub fn parse_json_object(text: &str) -> Result<Value, LlmError> {
    let text = strip_json_fences(text);

    let value = match serde_json::from_str::<Value>(text) {
        Ok(value) => value,
        Err(_) => {
            let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) else {
                return Err(LlmError::MissingJson);
            };
            if end < start {
                return Err(LlmError::MissingJson);
            }
            serde_json::from_str::<Value>(&text[start..=end])?
        }
    };

    if value.is_object() {
        Ok(value)
    } else {
        Err(LlmError::InvalidShape("expected a JSON object".to_string()))
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
