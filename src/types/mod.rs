pub mod artifact;
pub mod error;

pub use artifact::{Flashcard, QuizQuestion};
pub use error::{Result, StudyError};
