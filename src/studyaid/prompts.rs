//! Generation Prompts
//!
//! Fixed prompt templates for the three artifact kinds. The content is
//! appended after the instruction; there is no prompt-engineering layer
//! beyond these templates.

/// Up to 10 Q/A pairs as `Q:` / `A:` lines
pub fn flashcards_prompt(content: &str) -> String {
    format!(
        "Generate up to 10 clear Q&A flashcards from this content. \
         Format each as 'Q: ...' and 'A: ...':\n{}",
        content
    )
}

/// Markdown-flavored study notes, no structural requirements
pub fn notes_prompt(content: &str) -> String {
    format!(
        "Generate clear markdown-style study notes from this content:\n{}",
        content
    )
}

/// Exactly 5 multiple-choice questions in a strict three-line layout
pub fn quiz_prompt(content: &str) -> String {
    format!(
        "Create 5 multiple choice questions from this content. Format each as:\n\
         Question: ...\nOptions: option1, option2, option3, option4\nAnswer: ...\n{}",
        content
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_end_with_content() {
        let content = "The mitochondria is the powerhouse of the cell.";
        for prompt in [
            flashcards_prompt(content),
            notes_prompt(content),
            quiz_prompt(content),
        ] {
            assert!(prompt.ends_with(content));
        }
    }

    #[test]
    fn test_quiz_prompt_spells_out_layout() {
        let prompt = quiz_prompt("x");
        assert!(prompt.contains("Question: ..."));
        assert!(prompt.contains("Options: option1, option2, option3, option4"));
        assert!(prompt.contains("Answer: ..."));
    }
}
