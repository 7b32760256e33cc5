//! Completion Gateway
//!
//! The single boundary between the extraction layer and a completion
//! provider. Any transport, authentication, rate-limit, or provider-side
//! error is caught here, logged, and converted into `Failed` - it never
//! crosses into the extractor as an error value.

use tracing::warn;

use super::provider::SharedProvider;
use crate::constants::fallback;
use crate::types::StudyError;

/// Outcome of one completion call
///
/// `Failed` collapses to the fixed sentinel text via [`into_text`], which
/// matches no recognized line prefix; parsers fed the sentinel yield empty
/// results. Callers that need to tell "model said nothing useful" from
/// "model call failed" can match on the variant instead.
///
/// [`into_text`]: CompletionOutcome::into_text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The trimmed text of the first completion choice
    Generated(String),
    /// The completion call failed; detail was logged at the gateway
    Failed,
}

impl CompletionOutcome {
    /// Generated text, or the sentinel failure value
    pub fn into_text(self) -> String {
        match self {
            Self::Generated(text) => text,
            Self::Failed => fallback::COMPLETION_FAILURE_TEXT.to_string(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Wraps one provider behind the `complete(prompt, max_tokens)` contract
#[derive(Clone)]
pub struct CompletionGateway {
    provider: SharedProvider,
}

impl CompletionGateway {
    pub fn new(provider: SharedProvider) -> Self {
        Self { provider }
    }

    /// Issue one completion call.
    ///
    /// `operation` names the caller for log context only; it does not
    /// affect the request. Prompt validity is the caller's responsibility.
    pub async fn complete(
        &self,
        operation: &str,
        prompt: &str,
        max_tokens: u32,
    ) -> CompletionOutcome {
        match self.provider.complete(prompt, max_tokens).await {
            Ok(text) => CompletionOutcome::Generated(text.trim().to_string()),
            Err(error) => {
                log_failure(operation, self.provider.name(), &error);
                CompletionOutcome::Failed
            }
        }
    }
}

fn log_failure(operation: &str, provider: &str, error: &StudyError) {
    warn!(
        operation = operation,
        provider = provider,
        error = %error,
        "Completion call failed, substituting sentinel"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::provider::MockProvider;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_success_passes_trimmed_text_through() {
        let provider = MockProvider::new("Q: What is X?\nA: X is Y");
        let gateway = CompletionGateway::new(Arc::new(provider));

        let outcome = gateway.complete("flashcards", "prompt", 500).await;
        assert_eq!(
            outcome,
            CompletionOutcome::Generated("Q: What is X?\nA: X is Y".to_string())
        );
    }

    #[tokio::test]
    async fn test_failure_becomes_sentinel_not_error() {
        let mut provider = MockProvider::default();
        provider.add_failure("prompt", "429 rate limited");
        let gateway = CompletionGateway::new(Arc::new(provider));

        let outcome = gateway.complete("quiz", "prompt", 700).await;
        assert!(outcome.is_failed());
        assert_eq!(outcome.into_text(), "Error generating content");
    }

    #[test]
    fn test_generated_into_text_is_verbatim() {
        let outcome = CompletionOutcome::Generated("notes body".to_string());
        assert_eq!(outcome.into_text(), "notes body");
    }
}
