//! A lesson: the vocabulary gathered for one situation and language.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{EntryKind, VocabularyEntry};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub title: String,
    pub situation: String,
    pub language: String,
    pub vocabulary: Vec<VocabularyEntry>,
}

impl Lesson {
    pub fn new(
        title: impl Into<String>,
        situation: impl Into<String>,
        language: impl Into<String>,
        vocabulary: Vec<VocabularyEntry>,
    ) -> Self {
        Self {
            title: title.into(),
            situation: situation.into(),
            language: language.into(),
            vocabulary,
        }
    }

    pub fn words(&self) -> impl Iterator<Item = &VocabularyEntry> {
        self.of_kind(EntryKind::Word)
    }

    pub fn phrases(&self) -> impl Iterator<Item = &VocabularyEntry> {
        self.of_kind(EntryKind::Phrase)
    }

    fn of_kind(&self, kind: EntryKind) -> impl Iterator<Item = &VocabularyEntry> {
        self.vocabulary.iter().filter(move |e| e.kind == kind)
    }

    pub fn word_phrases(&self) -> Vec<String> {
        self.vocabulary
            .iter()
            .map(|e| e.word_phrase.clone())
            .collect()
    }

    /// Appends entries whose word/phrase is not already in the lesson.
    ///
    /// Returns how many entries were added.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = VocabularyEntry>) -> usize {
        let mut known: HashSet<String> = self
            .vocabulary
            .iter()
            .map(|e| e.word_phrase.clone())
            .collect();
        let before = self.vocabulary.len();

        for entry in entries {
            if known.insert(entry.word_phrase.clone()) {
                self.vocabulary.push(entry);
            }
        }

        self.vocabulary.len() - before
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}
