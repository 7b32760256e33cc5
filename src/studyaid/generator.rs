//! Study-Aid Generator
//!
//! The three operations the outer surface (CLI, HTTP handler, test
//! suite) calls. Each builds its fixed prompt, makes one gateway call,
//! and parses the result. None of them returns an error: malformed
//! model output degrades to partial or empty results, and a failed
//! completion call was already collapsed to the sentinel inside the
//! gateway.

use tracing::{debug, info};

use super::{parsers, prompts};
use crate::ai::{CompletionGateway, SharedProvider};
use crate::constants::budget;
use crate::types::{Flashcard, QuizQuestion};

/// Stateless facade over one completion gateway
#[derive(Clone)]
pub struct StudyAidGenerator {
    gateway: CompletionGateway,
}

impl StudyAidGenerator {
    pub fn new(gateway: CompletionGateway) -> Self {
        Self { gateway }
    }

    /// Convenience constructor wrapping a provider directly
    pub fn with_provider(provider: SharedProvider) -> Self {
        Self::new(CompletionGateway::new(provider))
    }

    /// Generate up to 10 flashcards from the given content.
    ///
    /// Whitespace-only content short-circuits to an empty batch without
    /// spending a model call.
    pub async fn generate_flashcards(&self, content: &str) -> Vec<Flashcard> {
        if content.trim().is_empty() {
            debug!("Empty content, skipping flashcard generation");
            return Vec::new();
        }

        let prompt = prompts::flashcards_prompt(content);
        let text = self
            .gateway
            .complete("flashcards", &prompt, budget::FLASHCARDS_MAX_TOKENS)
            .await
            .into_text();

        let cards = parsers::parse_flashcards(&text);
        info!(count = cards.len(), "Generated flashcards");
        cards
    }

    /// Generate markdown study notes from the given content.
    ///
    /// Returns the model output verbatim (trimmed); on a failed
    /// completion call this is the sentinel text itself.
    pub async fn generate_notes(&self, content: &str) -> String {
        if content.trim().is_empty() {
            debug!("Empty content, skipping notes generation");
            return String::new();
        }

        let prompt = prompts::notes_prompt(content);
        let notes = self
            .gateway
            .complete("notes", &prompt, budget::NOTES_MAX_TOKENS)
            .await
            .into_text();

        info!(chars = notes.len(), "Generated notes");
        notes
    }

    /// Generate up to 5 multiple-choice questions from the given content.
    pub async fn generate_quiz(&self, content: &str) -> Vec<QuizQuestion> {
        if content.trim().is_empty() {
            debug!("Empty content, skipping quiz generation");
            return Vec::new();
        }

        let prompt = prompts::quiz_prompt(content);
        let text = self
            .gateway
            .complete("quiz", &prompt, budget::QUIZ_MAX_TOKENS)
            .await
            .into_text();

        let quiz = parsers::parse_quiz(&text);
        info!(count = quiz.len(), "Generated quiz questions");
        quiz
    }
}
