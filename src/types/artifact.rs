//! Study-Aid Artifact Types
//!
//! Structured records produced by the extraction layer. Identities are
//! dense 1-based sequences assigned in emission order by the parsers,
//! never taken from numbering the model produced itself.

use serde::{Deserialize, Serialize};

/// A single question/answer flashcard
///
/// Immutable once created; lifecycle is create-on-parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// 1-based position within the generation batch
    pub id: u32,

    /// Question text (front of the card)
    pub front: String,

    /// Answer text; `"No answer"` when the model omitted one
    pub back: String,
}

/// A multiple-choice quiz question
///
/// `answer` is free-form text and is not guaranteed to match any entry
/// in `options` verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// 1-based position within the generation batch
    pub id: u32,

    /// Question text
    pub question: String,

    /// At least 2 entries; replaced wholesale by the placeholder set
    /// when the model supplied fewer
    pub options: Vec<String>,

    /// Expected answer text
    pub answer: String,
}
