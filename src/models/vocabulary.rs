use serde::{Deserialize, Serialize};

/// Whether an entry is a single word or a multi-word expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Word,
    Phrase,
}

/// A word or phrase in the target language with an example sentence.
///
/// `word_phrase` is the key of the entry within a batch; the quiz asks the
/// learner to match it with its `example_sentence`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    pub word_phrase: String,
    #[serde(default)]
    pub translation: String,
    pub example_sentence: String,
    #[serde(default)]
    pub example_sentence_translation: String,
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
}

impl VocabularyEntry {
    pub fn new(word_phrase: impl Into<String>, example_sentence: impl Into<String>) -> Self {
        Self {
            word_phrase: word_phrase.into(),
            translation: String::new(),
            example_sentence: example_sentence.into(),
            example_sentence_translation: String::new(),
            kind: EntryKind::Word,
        }
    }

    pub fn with_translations(
        mut self,
        translation: impl Into<String>,
        example_sentence_translation: impl Into<String>,
    ) -> Self {
        self.translation = translation.into();
        self.example_sentence_translation = example_sentence_translation.into();
        self
    }

    pub fn phrase(mut self) -> Self {
        self.kind = EntryKind::Phrase;
        self
    }
}
