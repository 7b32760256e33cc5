//! Structured Extractor
//!
//! Turns free-text study content into validated artifacts: flashcard
//! sets, markdown notes, and quiz sets. Builds the kind-specific prompt,
//! calls the completion gateway once, and parses the returned text with
//! line-oriented recognizers that tolerate missing or malformed lines.

pub mod generator;
pub mod parsers;
pub mod prompts;

pub use generator::StudyAidGenerator;
pub use parsers::{parse_flashcards, parse_quiz};
