mod question;
mod vocabulary;

pub use question::QuizQuestion;
pub use vocabulary::{EntryKind, VocabularyEntry};

/// Which screen the single-player app is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Typing the situation and target language.
    Form,
    /// Browsing the lesson's words and phrases.
    Vocabulary,
    /// Answering questions.
    Quiz,
    /// Score summary after the last question.
    Result,
}
