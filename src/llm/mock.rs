//! Mock generator for testing the pipeline without a real backend.
//!
//! Responses are matched against the prompt by substring, in insertion order.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::{Completion, TextGenerator, UsageMetadata};
use crate::{Result, SunshineError};

#[derive(Default)]
struct MockState {
    responses: Vec<(String, String)>,
    default_response: Option<String>,
    usage: Option<UsageMetadata>,
    failure: Option<String>,
    history: Vec<String>,
}

/// Generator returning canned completions and recording every prompt
#[derive(Clone, Default)]
pub struct MockGenerator {
    state: Arc<Mutex<MockState>>,
}

impl MockGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Answer `response` to any prompt containing `pattern`
    #[must_use]
    pub fn with_response(self, pattern: impl Into<String>, response: impl Into<String>) -> Self {
        self.state()
            .responses
            .push((pattern.into(), response.into()));
        self
    }

    /// Answer `response` when no pattern matches
    #[must_use]
    pub fn with_default_response(self, response: impl Into<String>) -> Self {
        self.state().default_response = Some(response.into());
        self
    }

    /// Attach usage metadata to every completion
    #[must_use]
    pub fn with_usage(self, usage: UsageMetadata) -> Self {
        self.state().usage = Some(usage);
        self
    }

    /// Fail every call with a generation error
    #[must_use]
    pub fn failing(self, message: impl Into<String>) -> Self {
        self.state().failure = Some(message.into());
        self
    }

    /// All prompts received so far
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.state().history.clone()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.state().history.len()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn complete(&self, prompt: &str) -> Result<Completion> {
        let mut state = self.state();
        state.history.push(prompt.to_string());

        if let Some(message) = &state.failure {
            return Err(SunshineError::generation(message.clone()));
        }

        let text = state
            .responses
            .iter()
            .find(|(pattern, _)| prompt.contains(pattern.as_str()))
            .map(|(_, response)| response.clone())
            .or_else(|| state.default_response.clone())
            .ok_or_else(|| SunshineError::generation("mock has no response for prompt"))?;

        Ok(Completion {
            text,
            usage: state.usage.clone(),
        })
    }
}
