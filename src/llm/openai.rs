//! OpenAI-compatible chat completions backend
//!
//! Works against any server exposing `POST {base}/chat/completions`
//! (OpenAI, Groq, OpenRouter, local Ollama/vLLM gateways).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{Completion, TextGenerator, UsageMetadata};
use crate::config::LlmConfig;
use crate::{Result, SunshineError};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    id: Option<String>,
    model: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
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
    prompt_tokens: Option<u64>,
    completion_tokens: Option<u64>,
    total_tokens: Option<u64>,
}

/// [`TextGenerator`] talking to an OpenAI-compatible chat endpoint
pub struct OpenAiChatGenerator {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
}

impl OpenAiChatGenerator {
    /// Create a new generator from the LLM configuration
    pub fn new(config: &LlmConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("sunshine/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone().filter(|key| !key.trim().is_empty()),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl TextGenerator for OpenAiChatGenerator {
    #[instrument(name = "chat_completion", skip_all, fields(model = %self.model))]
    async fn complete(&self, prompt: &str) -> Result<Completion> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| SunshineError::generation(format!("LLM request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SunshineError::generation(format!(
                "LLM endpoint returned status {status}"
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| SunshineError::generation(format!("invalid LLM response: {e}")))?;
        debug!("Received {} choice(s)", body.choices.len());

        let text = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| SunshineError::generation("LLM response was empty"))?;

        let usage = UsageMetadata {
            model: body.model,
            request_id: body.id,
            input_tokens: body.usage.as_ref().and_then(|u| u.prompt_tokens),
            output_tokens: body.usage.as_ref().and_then(|u| u.completion_tokens),
            total_tokens: body.usage.as_ref().and_then(|u| u.total_tokens),
        };

        Ok(Completion {
            text,
            usage: Some(usage),
        })
    }
}
