//! Generate Command
//!
//! Drives the three generation operations from the command line. Content
//! comes from a positional argument, an input file, or stdin, and output
//! renders as styled text or JSON.

use console::style;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::ai::{ProviderConfig, create_provider};
use crate::config::ConfigLoader;
use crate::studyaid::StudyAidGenerator;
use crate::types::{Result, StudyError};

/// Which artifact kind to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateKind {
    Flashcards,
    Notes,
    Quiz,
}

/// Resolved command-line inputs for one generation run
pub struct GenerateOptions {
    pub kind: GenerateKind,
    /// Content passed directly on the command line
    pub content: Option<String>,
    /// File to read content from; `-` means stdin
    pub input: Option<PathBuf>,
    /// Output format: "text" or "json"
    pub format: String,
}

pub async fn run(options: GenerateOptions) -> Result<()> {
    let content = resolve_content(&options)?;

    let config = ConfigLoader::load()?;
    let provider = create_provider(&ProviderConfig::from(&config.llm))?;
    let generator = StudyAidGenerator::with_provider(provider);

    let as_json = options.format == "json";
    match options.kind {
        GenerateKind::Flashcards => {
            let cards = generator.generate_flashcards(&content).await;
            if as_json {
                println!("{}", serde_json::to_string_pretty(&cards)?);
            } else if cards.is_empty() {
                println!("No flashcards could be generated.");
            } else {
                for card in &cards {
                    println!("{} {}", style(format!("[{}]", card.id)).bold(), card.front);
                    println!("    {}", style(&card.back).dim());
                }
            }
        }
        GenerateKind::Notes => {
            let notes = generator.generate_notes(&content).await;
            if as_json {
                println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "notes": notes }))?);
            } else {
                println!("{}", notes);
            }
        }
        GenerateKind::Quiz => {
            let quiz = generator.generate_quiz(&content).await;
            if as_json {
                println!("{}", serde_json::to_string_pretty(&quiz)?);
            } else if quiz.is_empty() {
                println!("No quiz questions could be generated.");
            } else {
                for question in &quiz {
                    println!(
                        "{} {}",
                        style(format!("{}.", question.id)).bold(),
                        question.question
                    );
                    for (idx, option) in question.options.iter().enumerate() {
                        let letter = (b'a' + idx as u8) as char;
                        println!("   {}) {}", letter, option);
                    }
                    println!("   {} {}", style("Answer:").green(), question.answer);
                    println!();
                }
            }
        }
    }

    Ok(())
}

/// Pick the content source: positional argument wins, then input file,
/// then stdin.
fn resolve_content(options: &GenerateOptions) -> Result<String> {
    if let Some(content) = &options.content {
        return Ok(content.clone());
    }

    match &options.input {
        Some(path) if path == Path::new("-") => read_stdin(),
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => read_stdin(),
    }
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| StudyError::Config(format!("Failed to read content from stdin: {}", e)))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_content_prefers_positional() {
        let options = GenerateOptions {
            kind: GenerateKind::Notes,
            content: Some("inline content".to_string()),
            input: Some(PathBuf::from("ignored.txt")),
            format: "text".to_string(),
        };
        assert_eq!(resolve_content(&options).unwrap(), "inline content");
    }

    #[test]
    fn test_resolve_content_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("content.txt");
        std::fs::write(&path, "file content").unwrap();

        let options = GenerateOptions {
            kind: GenerateKind::Flashcards,
            content: None,
            input: Some(path),
            format: "text".to_string(),
        };
        assert_eq!(resolve_content(&options).unwrap(), "file content");
    }

    #[test]
    fn test_resolve_content_missing_file_is_io_error() {
        let options = GenerateOptions {
            kind: GenerateKind::Quiz,
            content: None,
            input: Some(PathBuf::from("/nonexistent/content.txt")),
            format: "text".to_string(),
        };
        assert!(matches!(
            resolve_content(&options),
            Err(StudyError::Io(_))
        ));
    }
}
