//! Completion Provider Abstraction
//!
//! Defines the CompletionProvider trait: one plain-text completion call
//! against a hosted model. Providers map their own wire shapes onto this
//! narrow surface so nothing downstream depends on a provider-specific
//! response layout.

mod gemini;
mod mock;

pub use gemini::GeminiProvider;
pub use mock::MockProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::LlmConfig;
use crate::constants::{model, network};
use crate::types::{Result, StudyError};

/// Shared provider type for concurrent access across operations.
pub type SharedProvider = Arc<dyn CompletionProvider>;

// =============================================================================
// Provider Configuration
// =============================================================================

/// Configuration for completion providers
///
/// Note: API keys are handled securely - they are never serialized to output
/// and are redacted in debug output. Each provider converts the key to
/// SecretString internally for runtime protection.
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider type: "gemini", "mock"
    pub provider: String,
    /// Model name (provider-specific)
    pub model: String,
    /// API base URL (OpenAI-compatible endpoint)
    pub api_base: String,
    /// API key
    /// Never serialized to output for security
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Temperature for generation
    pub temperature: f32,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: model::DEFAULT_MODEL.to_string(),
            api_base: model::DEFAULT_API_BASE.to_string(),
            api_key: None,
            timeout_secs: network::DEFAULT_TIMEOUT_SECS,
            temperature: model::TEMPERATURE,
        }
    }
}

impl From<&LlmConfig> for ProviderConfig {
    fn from(llm: &LlmConfig) -> Self {
        Self {
            provider: llm.provider.clone(),
            model: llm.model.clone(),
            api_base: llm.api_base.clone(),
            api_key: llm.api_key.clone(),
            timeout_secs: llm.timeout_secs,
            temperature: llm.temperature,
        }
    }
}

// =============================================================================
// Completion Provider Trait
// =============================================================================

/// One text-completion round trip to a hosted model
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate text for a prompt, bounded by `max_tokens`.
    ///
    /// Returns the trimmed text of the first completion choice. Prompt
    /// validity is the caller's responsibility; the provider does not
    /// reject empty prompts.
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model name currently in use
    fn model(&self) -> &str;

    /// Check if the provider is available
    async fn health_check(&self) -> Result<bool>;
}

/// Create a shared provider from configuration
pub fn create_provider(config: &ProviderConfig) -> Result<SharedProvider> {
    match config.provider.as_str() {
        "gemini" => Ok(Arc::new(GeminiProvider::new(config.clone())?)),
        "mock" => Ok(Arc::new(MockProvider::default())),
        _ => Err(StudyError::Config(format!(
            "Unknown provider: {}. Supported: gemini, mock",
            config.provider
        ))),
    }
}
