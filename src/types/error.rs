//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Design Principles
//!
//! - Single unified error type (StudyError) for the entire application
//! - Structured error variants with context for better debugging
//! - Completion failures never cross the extraction boundary: the gateway
//!   converts them to a sentinel value before parsers run

use thiserror::Error;

/// Result type alias using StudyError
pub type Result<T> = std::result::Result<T, StudyError>;

/// Unified application error type
#[derive(Error, Debug)]
pub enum StudyError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // LLM Errors
    // -------------------------------------------------------------------------
    /// Transport, authentication, rate-limit, or provider-side failure.
    /// Only ever observed inside the completion gateway.
    #[error("LLM API error: {0}")]
    LlmApi(String),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),
}
