//! AI Integration Layer
//!
//! Provider abstraction and the completion gateway the extraction
//! layer talks to.

pub mod gateway;
pub mod provider;

pub use gateway::{CompletionGateway, CompletionOutcome};
pub use provider::{
    CompletionProvider, GeminiProvider, MockProvider, ProviderConfig, SharedProvider,
    create_provider,
};
