//! Generative-text capability and the accounting attached to it

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

pub mod cost;
pub mod mock;
pub mod openai;
pub mod structured;

pub use cost::{CostEstimator, estimate_cost};
pub use mock::MockGenerator;
pub use openai::OpenAiChatGenerator;
pub use structured::StructuredOutput;

const UNKNOWN_MODEL: &str = "unknown-model";
const UNKNOWN_REQUEST: &str = "unknown-request";

/// Usage metadata as reported by a backend. Every field is best-effort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageMetadata {
    pub model: Option<String>,
    pub request_id: Option<String>,
    pub input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
    pub total_tokens: Option<u64>,
}

/// Text returned by one generator call together with its usage metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub usage: Option<UsageMetadata>,
}

impl Completion {
    /// Completion without usage metadata
    #[must_use]
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
        }
    }
}

/// A backend that turns a prompt into text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Complete `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SunshineError::Generation`] if the backend is
    /// unreachable or returns no text.
    async fn complete(&self, prompt: &str) -> Result<Completion>;
}

/// Per-call usage with sentinels filled in for anything the backend omitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageRecord {
    pub model: String,
    pub request_id: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
}

impl UsageRecord {
    /// Record used when the backend reported nothing at all
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            model: UNKNOWN_MODEL.to_string(),
            request_id: UNKNOWN_REQUEST.to_string(),
            input_tokens: 0,
            output_tokens: 0,
            total_tokens: 0,
        }
    }

    /// Normalise optional backend metadata. Never fails.
    #[must_use]
    pub fn from_metadata(metadata: Option<&UsageMetadata>) -> Self {
        let Some(metadata) = metadata else {
            return Self::unknown();
        };

        let input_tokens = metadata.input_tokens.unwrap_or(0);
        let output_tokens = metadata.output_tokens.unwrap_or(0);
        let non_blank = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Self {
            model: non_blank(&metadata.model).unwrap_or_else(|| UNKNOWN_MODEL.to_string()),
            request_id: non_blank(&metadata.request_id)
                .unwrap_or_else(|| UNKNOWN_REQUEST.to_string()),
            input_tokens,
            output_tokens,
            total_tokens: metadata
                .total_tokens
                .unwrap_or_else(|| input_tokens.saturating_add(output_tokens)),
        }
    }
}
