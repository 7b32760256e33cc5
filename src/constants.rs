//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Completion model constants
pub mod model {
    /// Default model identifier (lightweight Gemini model)
    pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";

    /// OpenAI-compatible Gemini endpoint
    pub const DEFAULT_API_BASE: &str =
        "https://generativelanguage.googleapis.com/v1beta/openai";

    /// Fixed sampling temperature for study-aid generation
    pub const TEMPERATURE: f32 = 0.7;
}

/// Per-operation token budgets
pub mod budget {
    /// Flashcard generation (up to 10 short Q/A pairs)
    pub const FLASHCARDS_MAX_TOKENS: u32 = 500;

    /// Notes generation (a full markdown document)
    pub const NOTES_MAX_TOKENS: u32 = 800;

    /// Quiz generation (5 questions, three lines each)
    pub const QUIZ_MAX_TOKENS: u32 = 700;
}

/// Batch caps and record requirements
pub mod limits {
    /// Maximum flashcards emitted per generation, regardless of model output
    pub const MAX_FLASHCARDS: usize = 10;

    /// Maximum quiz questions emitted per generation
    pub const MAX_QUIZ_QUESTIONS: usize = 5;

    /// Minimum usable options before the placeholder set is substituted
    pub const MIN_QUIZ_OPTIONS: usize = 2;
}

/// Fallback values substituted for missing or failed content
pub mod fallback {
    /// Sentinel returned in place of model output when the completion
    /// call fails. Matches no recognized line prefix, so downstream
    /// parsers yield empty results when fed it.
    pub const COMPLETION_FAILURE_TEXT: &str = "Error generating content";

    /// Answer placeholder for a `Q:` line with no following `A:` line
    pub const MISSING_ANSWER: &str = "No answer";

    /// Options substituted wholesale when fewer than
    /// [`limits::MIN_QUIZ_OPTIONS`](super::limits::MIN_QUIZ_OPTIONS) survive parsing
    pub const PLACEHOLDER_OPTIONS: [&str; 4] =
        ["Option 1", "Option 2", "Option 3", "Option 4"];
}

/// HTTP/Network constants
pub mod network {
    /// Default request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
}
