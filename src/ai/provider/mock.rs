//! Mock Completion Provider
//!
//! Deterministic provider for tests and offline runs. Returns
//! pre-configured responses without making any network calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::CompletionProvider;
use crate::types::{Result, StudyError};

/// In-memory provider with scripted responses
///
/// Clones share state, so a test can hold one handle while the code
/// under test holds another and both observe the same call count.
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, MockReply>>>,
    call_count: Arc<Mutex<usize>>,
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Failure(String),
}

impl MockProvider {
    /// Create a provider that returns `response` for every prompt
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Script a response for a specific prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), MockReply::Text(response.into()));
    }

    /// Script a failure for a specific prompt
    pub fn add_failure(&mut self, prompt: impl Into<String>, message: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), MockReply::Failure(message.into()));
    }

    /// Number of times `complete` has been called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, prompt: &str, _max_tokens: u32) -> Result<String> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        match responses.get(prompt) {
            Some(MockReply::Text(text)) => Ok(text.trim().to_string()),
            Some(MockReply::Failure(message)) => Err(StudyError::LlmApi(message.clone())),
            None => Ok(self.default_response.trim().to_string()),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }
}
