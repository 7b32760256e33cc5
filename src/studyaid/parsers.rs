//! Completion Output Parsers
//!
//! Line-oriented recognizers for model output. Both parsers make a single
//! forward pass over non-blank trimmed lines, never backtrack, and never
//! fail: malformed output degrades to partial or empty results with
//! placeholder values substituted where a field is missing.

use tracing::warn;

use crate::constants::{fallback, limits};
use crate::types::{Flashcard, QuizQuestion};

/// Parse `Q:` / `A:` lines into flashcards.
///
/// A `Q:` line opens a card; the immediately following line supplies the
/// answer if and only if it starts with `A:`, otherwise the answer
/// defaults to the placeholder and no extra line is consumed. Lines not
/// starting with `Q:` are skipped. Emission stops at
/// [`limits::MAX_FLASHCARDS`] cards.
pub fn parse_flashcards(text: &str) -> Vec<Flashcard> {
    let lines = non_blank_lines(text);

    let mut cards = Vec::new();
    let mut i = 0;
    while i < lines.len() && cards.len() < limits::MAX_FLASHCARDS {
        if let Some(question) = lines[i].strip_prefix("Q:") {
            let mut answer = fallback::MISSING_ANSWER.to_string();
            if i + 1 < lines.len()
                && let Some(next) = lines[i + 1].strip_prefix("A:")
            {
                answer = next.trim().to_string();
                i += 1;
            }
            cards.push(Flashcard {
                id: cards.len() as u32 + 1,
                front: question.trim().to_string(),
                back: answer,
            });
        }
        i += 1;
    }
    cards
}

/// Parse `Question:` / `Options:` / `Answer:` line triples into quiz
/// questions.
///
/// Groups of exactly three consecutive lines are consumed per question,
/// with best-effort label stripping (the label text is removed wherever
/// it appears in the line; an absent label leaves the line unmodified).
/// On a group failure the cursor advances by one line rather than three,
/// deliberately attempting to realign on a subsequent mis-grouped line;
/// this can desynchronize the remaining groups in the same batch.
/// Emission stops at [`limits::MAX_QUIZ_QUESTIONS`] questions or when
/// fewer than three lines remain.
pub fn parse_quiz(text: &str) -> Vec<QuizQuestion> {
    let lines = non_blank_lines(text);

    let mut quiz = Vec::new();
    let mut i = 0;
    while i + 2 < lines.len() && quiz.len() < limits::MAX_QUIZ_QUESTIONS {
        match parse_quiz_group(lines[i], lines[i + 1], lines[i + 2]) {
            Ok((question, options, answer)) => {
                quiz.push(QuizQuestion {
                    id: quiz.len() as u32 + 1,
                    question,
                    options,
                    answer,
                });
                i += 3;
            }
            Err(reason) => {
                warn!(line = i, reason = reason, "Skipping malformed quiz group");
                i = resync(i);
            }
        }
    }
    quiz
}

/// Recovery step for a failed group: advance one line rather than three,
/// attempting to realign on a subsequent mis-grouped line. Later groups
/// in the batch then read shifted lines.
fn resync(cursor: usize) -> usize {
    cursor + 1
}

/// Build one question from a three-line group.
///
/// Every field is patched up rather than refused: an absent label leaves
/// the line unmodified, an empty question text is emitted as-is, and a
/// thin options list is replaced wholesale. No failure route remains in
/// record construction, so the resynchronization arm in the caller sits
/// idle for all current input.
fn parse_quiz_group(
    question_line: &str,
    options_line: &str,
    answer_line: &str,
) -> Result<(String, Vec<String>, String), &'static str> {
    let question = strip_label(question_line, "Question:");

    let mut options: Vec<String> = strip_label(options_line, "Options:")
        .split(',')
        .map(str::trim)
        .filter(|opt| !opt.is_empty())
        .map(String::from)
        .collect();
    if options.len() < limits::MIN_QUIZ_OPTIONS {
        options = fallback::PLACEHOLDER_OPTIONS
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    let answer = strip_label(answer_line, "Answer:");

    Ok((question, options, answer))
}

/// Best-effort label strip: the label text is removed wherever it
/// appears in the line, then the ends are trimmed. A line without the
/// label passes through trimmed but otherwise unmodified.
fn strip_label(line: &str, label: &str) -> String {
    line.replace(label, "").trim().to_string()
}

fn non_blank_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // -------------------------------------------------------------------------
    // Flashcards
    // -------------------------------------------------------------------------

    #[test]
    fn flashcard_single_pair() {
        let cards = parse_flashcards("Q: What is X?\nA: X is Y");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, 1);
        assert_eq!(cards[0].front, "What is X?");
        assert_eq!(cards[0].back, "X is Y");
    }

    #[test]
    fn flashcard_orphan_question_gets_placeholder_answer() {
        let cards = parse_flashcards("Q: Orphan question");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].back, "No answer");
    }

    #[test]
    fn flashcard_question_followed_by_question() {
        // First Q has no A: line after it; the second line must still be
        // consumed as its own question.
        let cards = parse_flashcards("Q: First?\nQ: Second?\nA: Second answer");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].back, "No answer");
        assert_eq!(cards[1].front, "Second?");
        assert_eq!(cards[1].back, "Second answer");
    }

    #[test]
    fn flashcard_answer_without_question_is_dropped() {
        let cards = parse_flashcards("A: Floating answer\nQ: Real?\nA: Yes");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].front, "Real?");
    }

    #[test]
    fn flashcard_prose_between_pairs_is_skipped() {
        let text = "Here are your flashcards!\n\nQ: One?\nA: 1\nHope this helps.\nQ: Two?\nA: 2";
        let cards = parse_flashcards(text);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].front, "Two?");
    }

    #[test]
    fn flashcard_capped_at_ten_in_order() {
        let mut text = String::new();
        for n in 1..=12 {
            text.push_str(&format!("Q: Question {}?\nA: Answer {}\n", n, n));
        }
        let cards = parse_flashcards(&text);
        assert_eq!(cards.len(), 10);
        assert_eq!(cards[0].front, "Question 1?");
        assert_eq!(cards[9].front, "Question 10?");
        let ids: Vec<u32> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn flashcard_ids_ignore_model_numbering() {
        // Model hallucinated its own numbering; ids still come from
        // emission order.
        let cards = parse_flashcards("Q: 7. What?\nA: 7. That");
        assert_eq!(cards[0].id, 1);
        assert_eq!(cards[0].front, "7. What?");
    }

    #[test]
    fn flashcard_sentinel_yields_empty() {
        assert!(parse_flashcards("Error generating content").is_empty());
    }

    #[test]
    fn flashcard_empty_and_blank_input() {
        assert!(parse_flashcards("").is_empty());
        assert!(parse_flashcards("\n  \n\t\n").is_empty());
    }

    // -------------------------------------------------------------------------
    // Quiz
    // -------------------------------------------------------------------------

    #[test]
    fn quiz_single_group() {
        let quiz = parse_quiz("Question: 2+2?\nOptions: 1, 2, 3, 4\nAnswer: 4");
        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz[0].id, 1);
        assert_eq!(quiz[0].question, "2+2?");
        assert_eq!(quiz[0].options, vec!["1", "2", "3", "4"]);
        assert_eq!(quiz[0].answer, "4");
    }

    #[test]
    fn quiz_empty_options_line_gets_placeholder_set() {
        let quiz = parse_quiz("Question: Hard one?\nOptions:\nAnswer: maybe");
        assert_eq!(quiz.len(), 1);
        assert_eq!(
            quiz[0].options,
            vec!["Option 1", "Option 2", "Option 3", "Option 4"]
        );
        assert_eq!(quiz[0].answer, "maybe");
    }

    #[test]
    fn quiz_single_option_gets_placeholder_set() {
        let quiz = parse_quiz("Question: Pick?\nOptions: only one\nAnswer: only one");
        assert_eq!(quiz[0].options.len(), 4);
        assert_eq!(quiz[0].options[0], "Option 1");
    }

    #[test]
    fn quiz_two_options_kept_as_is() {
        let quiz = parse_quiz("Question: Coin flip?\nOptions: heads, tails\nAnswer: heads");
        assert_eq!(quiz[0].options, vec!["heads", "tails"]);
    }

    #[test]
    fn quiz_options_empty_pieces_filtered() {
        let quiz = parse_quiz("Question: Q?\nOptions: a, , b, ,\nAnswer: a");
        assert_eq!(quiz[0].options, vec!["a", "b"]);
    }

    #[test]
    fn quiz_missing_prefixes_use_lines_unmodified() {
        // Best-effort strip: prefix-less lines pass through as-is.
        let quiz = parse_quiz("What color is the sky?\nblue, green, red\nblue");
        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz[0].question, "What color is the sky?");
        assert_eq!(quiz[0].options, vec!["blue", "green", "red"]);
        assert_eq!(quiz[0].answer, "blue");
    }

    #[test]
    fn quiz_answer_not_required_to_match_options() {
        let quiz = parse_quiz("Question: Q?\nOptions: a, b\nAnswer: none of these");
        assert_eq!(quiz[0].answer, "none of these");
    }

    #[test]
    fn quiz_capped_at_five() {
        let mut text = String::new();
        for n in 1..=7 {
            text.push_str(&format!(
                "Question: Number {}?\nOptions: a, b, c, d\nAnswer: a\n",
                n
            ));
        }
        let quiz = parse_quiz(&text);
        assert_eq!(quiz.len(), 5);
        let ids: Vec<u32> = quiz.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn quiz_trailing_partial_group_is_dropped() {
        let quiz = parse_quiz(
            "Question: Full?\nOptions: a, b\nAnswer: a\nQuestion: Cut off?\nOptions: c, d",
        );
        assert_eq!(quiz.len(), 1);
    }

    #[test]
    fn quiz_sentinel_yields_empty() {
        assert!(parse_quiz("Error generating content").is_empty());
    }

    #[test]
    fn quiz_bare_question_line_emits_record() {
        // A bare `Question:` label is not a group failure: the record is
        // emitted with empty question text and the cursor advances by
        // three, keeping later groups aligned.
        let text = "Question:\n\
                    Options: a, b\n\
                    Answer: a\n\
                    Question: Real one?\n\
                    Options: x, y\n\
                    Answer: x";
        let quiz = parse_quiz(text);

        assert_eq!(quiz.len(), 2);
        assert_eq!(quiz[0].question, "");
        assert_eq!(quiz[0].options, vec!["a", "b"]);
        assert_eq!(quiz[0].answer, "a");
        assert_eq!(quiz[1].question, "Real one?");
        assert_eq!(quiz[1].options, vec!["x", "y"]);
    }

    #[test]
    fn quiz_label_removed_wherever_it_appears() {
        // Label stripping removes the label text anywhere in the line,
        // not only at the start, leaving the surrounding text (and its
        // inner whitespace) intact.
        let quiz = parse_quiz("1. Question: What?\nOptions: red, blue\nAnswer: red");
        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz[0].question, "1.  What?");
        assert_eq!(quiz[0].options, vec!["red", "blue"]);
    }

    /// Documented quirk: a failed group advances the cursor by one line,
    /// not three, so every later group in the batch reads shifted lines.
    /// Record construction is unvalidated and currently cannot fail, so
    /// the recovery step is pinned here directly rather than through
    /// parse output. Preserved as observed behavior, not because it is
    /// known-correct.
    #[test]
    fn quiz_group_recovery_advances_one_line() {
        assert_eq!(resync(0), 1);
        assert_eq!(resync(3), 4);
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    /// Arbitrary multi-line model output, including prefix-bearing lines
    fn arb_response() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                "[ -~]{0,40}",
                "Q: [ -~]{0,30}",
                "A: [ -~]{0,30}",
                "Question: [ -~]{0,30}",
                "Options: [ -~]{0,30}",
                "Answer: [ -~]{0,30}",
            ],
            0..60,
        )
        .prop_map(|lines| lines.join("\n"))
    }

    proptest! {
        #[test]
        fn parse_flashcards_never_panics_and_ids_dense(text in arb_response()) {
            let cards = parse_flashcards(&text);
            prop_assert!(cards.len() <= 10);
            for (idx, card) in cards.iter().enumerate() {
                prop_assert_eq!(card.id as usize, idx + 1);
            }
        }

        #[test]
        fn parse_quiz_never_panics_and_ids_dense(text in arb_response()) {
            let quiz = parse_quiz(&text);
            prop_assert!(quiz.len() <= 5);
            for (idx, question) in quiz.iter().enumerate() {
                prop_assert_eq!(question.id as usize, idx + 1);
                prop_assert!(question.options.len() >= 2);
            }
        }
    }
}
