use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::models::VocabularyEntry;

/// Errors raised while reading a lesson bank.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse lesson bank: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("lesson bank must contain at least one topic")]
    Empty,
    #[error("topic {0:?} has no vocabulary")]
    EmptyTopic(String),
}

/// Vocabulary prepared for one situation in one language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub title: String,
    pub situation: String,
    pub language: String,
    pub vocabulary: Vec<VocabularyEntry>,
}

impl Topic {
    /// Case-insensitive match: equal language, and either situation text
    /// contains the other.
    pub fn matches(&self, situation: &str, language: &str) -> bool {
        let situation = situation.trim().to_lowercase();
        let own = self.situation.to_lowercase();
        self.language.trim().to_lowercase() == language.trim().to_lowercase()
            && !situation.is_empty()
            && (own.contains(&situation) || situation.contains(&own))
    }
}

/// The offline collection of topics served as vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LessonBank {
    pub topics: Vec<Topic>,
}

impl LessonBank {
    pub fn find(&self, situation: &str, language: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.matches(situation, language))
    }
}

/// Parses a lesson bank from JSON text.
pub fn parse_bank(json: &str) -> Result<LessonBank, LoadError> {
    let bank: LessonBank = serde_json::from_str(json)?;

    if bank.topics.is_empty() {
        return Err(LoadError::Empty);
    }
    if let Some(topic) = bank.topics.iter().find(|t| t.vocabulary.is_empty()) {
        return Err(LoadError::EmptyTopic(topic.title.clone()));
    }

    Ok(bank)
}

pub fn load_bank_from_json<P: AsRef<Path>>(path: P) -> Result<LessonBank, LoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bank = parse_bank(&json)?;
    debug!("loaded {} topics from {}", bank.topics.len(), path.display());
    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANK: &str = r#"{
        "topics": [
            {
                "title": "Coffee in Paris",
                "situation": "Ordering coffee in Paris",
                "language": "French",
                "vocabulary": [
                    {"wordPhrase": "un café", "exampleSentence": "Un café, s'il vous plaît."}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_bank() {
        let bank = parse_bank(BANK).unwrap();
        assert_eq!(bank.topics.len(), 1);
        assert_eq!(bank.topics[0].vocabulary[0].word_phrase, "un café");
    }

    #[test]
    fn test_find_topic() {
        let bank = parse_bank(BANK).unwrap();
        assert!(bank.find("ordering coffee", "french").is_some());
        assert!(bank.find("ordering coffee in paris at dawn", "French").is_some());
        assert!(bank.find("ordering coffee", "Spanish").is_none());
        assert!(bank.find("", "French").is_none());
    }

    #[test]
    fn test_find_topic_non_ascii_language() {
        let json = r#"{"topics": [{
            "title": "Στο καφέ",
            "situation": "Ordering coffee in Athens",
            "language": "Ελληνικά",
            "vocabulary": [{"wordPhrase": "ένας καφές", "exampleSentence": "Έναν καφέ, παρακαλώ."}]
        }]}"#;
        let bank = parse_bank(json).unwrap();
        assert!(bank.find("ordering coffee", "ΕΛΛΗΝΙΚΆ").is_some());
        assert!(bank.find("ordering coffee", " ελληνικά ").is_some());
        assert!(bank.find("ordering coffee", "Ελληνικ").is_none());
    }

    #[test]
    fn test_empty_bank_rejected() {
        assert!(matches!(parse_bank(r#"{"topics": []}"#), Err(LoadError::Empty)));
    }

    #[test]
    fn test_empty_topic_rejected() {
        let json = r#"{"topics": [{"title": "T", "situation": "s", "language": "l", "vocabulary": []}]}"#;
        assert!(matches!(parse_bank(json), Err(LoadError::EmptyTopic(t)) if t == "T"));
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(matches!(parse_bank("not json"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_demo_bank_parses() {
        let bank = parse_bank(include_str!("../../demos/lessons.json")).unwrap();
        assert_eq!(bank.topics.len(), 2);
        assert!(bank.find("ordering coffee", "French").is_some());
        assert!(bank.find("buying a train ticket", "spanish").is_some());
    }

    #[test]
    fn test_missing_file() {
        let err = load_bank_from_json("/nonexistent/lessons.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/lessons.json"));
    }
}
