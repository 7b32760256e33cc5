//! Studygen - AI Study-Aid Generator
//!
//! Generates flashcards, markdown study notes, and multiple-choice
//! quizzes from free-text content using a single text-completion call
//! to a hosted model.
//!
//! ## Architecture
//!
//! ```text
//! caller → StudyAidGenerator → (prompt) → CompletionGateway → provider
//!        ← validated records  ← (parse)  ← raw text          ←
//! ```
//!
//! The extraction layer never raises on malformed model output: the
//! line-oriented parsers degrade to partial or empty results, and the
//! gateway converts provider failures into a sentinel value instead of
//! propagating them.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use studygen::{CompletionGateway, GeminiProvider, ProviderConfig, StudyAidGenerator};
//!
//! # async fn example() -> studygen::Result<()> {
//! let provider = GeminiProvider::new(ProviderConfig::default())?;
//! let generator = StudyAidGenerator::with_provider(Arc::new(provider));
//!
//! let cards = generator.generate_flashcards("The water cycle ...").await;
//! for card in cards {
//!     println!("{}: {} / {}", card.id, card.front, card.back);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ai`]: provider abstraction and the completion gateway
//! - [`studyaid`]: prompt templates, output parsers, the generator facade
//! - [`config`]: layered configuration (defaults, files, env)

pub mod ai;
pub mod cli;
pub mod config;
pub mod constants;
pub mod studyaid;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, LlmConfig};

// Error Types
pub use types::error::{Result, StudyError};

// Artifacts
pub use types::artifact::{Flashcard, QuizQuestion};

// =============================================================================
// AI Re-exports
// =============================================================================

pub use ai::{
    CompletionGateway, CompletionOutcome, CompletionProvider, GeminiProvider, MockProvider,
    ProviderConfig, SharedProvider, create_provider,
};

// =============================================================================
// Generator Re-exports
// =============================================================================

pub use studyaid::StudyAidGenerator;
