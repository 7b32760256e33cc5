//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/studygen/) and project (.studygen/) level
//! configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{model, network};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// LLM provider settings
    pub llm: LlmConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            llm: LlmConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `StudyError::Config` on validation failure.
    pub fn validate(&self) -> crate::types::Result<()> {
        // LLM temperature validation
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(crate::types::StudyError::Config(format!(
                "LLM temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            )));
        }

        // Timeout validation
        if self.llm.timeout_secs == 0 {
            return Err(crate::types::StudyError::Config(
                "LLM timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// LLM Configuration
// =============================================================================

/// Completion provider settings
///
/// The API key is never serialized to output; it is redacted in debug
/// output and converted to a SecretString at the provider boundary.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name ("gemini" or "mock")
    pub provider: String,

    /// Model name (provider-specific)
    pub model: String,

    /// API base URL (OpenAI-compatible endpoint)
    pub api_base: String,

    /// API key; falls back to the GEMINI_API_KEY environment variable
    /// Never serialized to output for security
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Sampling temperature for study-aid generation
    pub temperature: f32,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl Default for LlmConfig {
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

// =============================================================================
// Tests
// =============================================================================
