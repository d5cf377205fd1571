//! Vocabulary sources.
//!
//! Content generation is an external capability: a structured request goes
//! in, and a structured response or a [`ProviderError`] comes back. The
//! [`BankProvider`] serves it offline from a [`LessonBank`].

use std::collections::HashSet;
use std::fmt;

use async_trait::async_trait;
use log::{debug, warn};
use thiserror::Error;

use crate::data::{LessonBank, Topic};
use crate::lesson::Lesson;
use crate::models::VocabularyEntry;

/// Vocabulary items requested when a lesson is opened.
pub const DEFAULT_NUM_RESULTS: usize = 10;

/// Items returned per "more vocabulary" request.
pub const REGENERATE_BATCH: usize = 5;

pub const SITUATION_MIN_LENGTH: usize = 3;
pub const LANGUAGE_MIN_LENGTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("invalid request: {0}")]
    InvalidForm(FormErrors),
    #[error("no lesson available for {situation:?} in {language}")]
    NoTopic { situation: String, language: String },
    #[error("no new vocabulary left for {0:?}")]
    Exhausted(String),
    #[error("provider failed: {0}")]
    Failed(String),
}

/// Per-field validation messages for a [`SituationForm`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub situation: Option<&'static str>,
    pub language: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.situation.is_none() && self.language.is_none()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = [self.situation, self.language]
            .into_iter()
            .flatten()
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// What the learner typed on the start screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SituationForm {
    pub situation: String,
    pub language: String,
}

impl SituationForm {
    pub fn new(situation: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            situation: situation.into(),
            language: language.into(),
        }
    }

    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();

        if self.situation.trim().chars().count() < SITUATION_MIN_LENGTH {
            errors.situation = Some("Situation must be at least 3 characters long.");
        }
        if self.language.trim().chars().count() < LANGUAGE_MIN_LENGTH {
            errors.language = Some("Language must be at least 2 characters long.");
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyRequest {
    pub situation: String,
    pub target_language: String,
    pub num_results: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegenerateRequest {
    pub context: String,
    pub language: String,
    /// Word/phrase keys the learner already has.
    pub previous_vocabulary: Vec<String>,
}

impl RegenerateRequest {
    pub fn for_lesson(lesson: &Lesson) -> Self {
        Self {
            context: lesson.situation.clone(),
            language: lesson.language.clone(),
            previous_vocabulary: lesson.word_phrases(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleRequest {
    pub situation: String,
    pub language: String,
}

#[async_trait]
pub trait VocabularyProvider: Send + Sync {
    async fn generate_vocabulary(
        &self,
        request: &VocabularyRequest,
    ) -> Result<Vec<VocabularyEntry>, ProviderError>;

    /// Returns vocabulary not listed in `previous_vocabulary`.
    async fn regenerate_vocabulary(
        &self,
        request: &RegenerateRequest,
    ) -> Result<Vec<VocabularyEntry>, ProviderError>;

    async fn generate_title(&self, request: &TitleRequest) -> Result<String, ProviderError>;
}

/// Serves vocabulary from a pre-built lesson bank.
pub struct BankProvider {
    bank: LessonBank,
}

impl BankProvider {
    pub fn new(bank: LessonBank) -> Self {
        Self { bank }
    }

    fn topic(&self, situation: &str, language: &str) -> Result<&Topic, ProviderError> {
        self.bank
            .find(situation, language)
            .ok_or_else(|| ProviderError::NoTopic {
                situation: situation.to_string(),
                language: language.to_string(),
            })
    }
}

#[async_trait]
impl VocabularyProvider for BankProvider {
    async fn generate_vocabulary(
        &self,
        request: &VocabularyRequest,
    ) -> Result<Vec<VocabularyEntry>, ProviderError> {
        let topic = self.topic(&request.situation, &request.target_language)?;
        debug!(
            "serving {} of {} entries for {:?}",
            request.num_results.min(topic.vocabulary.len()),
            topic.vocabulary.len(),
            topic.title
        );
        Ok(topic
            .vocabulary
            .iter()
            .take(request.num_results)
            .cloned()
            .collect())
    }

    async fn regenerate_vocabulary(
        &self,
        request: &RegenerateRequest,
    ) -> Result<Vec<VocabularyEntry>, ProviderError> {
        let topic = self.topic(&request.context, &request.language)?;
        let previous: HashSet<&str> = request
            .previous_vocabulary
            .iter()
            .map(String::as_str)
            .collect();

        let fresh: Vec<VocabularyEntry> = topic
            .vocabulary
            .iter()
            .filter(|e| !previous.contains(e.word_phrase.as_str()))
            .take(REGENERATE_BATCH)
            .cloned()
            .collect();

        if fresh.is_empty() {
            return Err(ProviderError::Exhausted(topic.title.clone()));
        }
        Ok(fresh)
    }

    async fn generate_title(&self, request: &TitleRequest) -> Result<String, ProviderError> {
        self.topic(&request.situation, &request.language)
            .map(|t| t.title.clone())
    }
}

/// Validates the form, then fetches the title and vocabulary together.
///
/// A missing title falls back to the situation text; missing vocabulary is
/// an error.
pub async fn open_lesson(
    provider: &dyn VocabularyProvider,
    form: &SituationForm,
    num_results: usize,
) -> Result<Lesson, ProviderError> {
    form.validate().map_err(ProviderError::InvalidForm)?;

    let situation = form.situation.trim().to_string();
    let language = form.language.trim().to_string();

    let title_request = TitleRequest {
        situation: situation.clone(),
        language: language.clone(),
    };
    let vocabulary_request = VocabularyRequest {
        situation: situation.clone(),
        target_language: language.clone(),
        num_results,
    };

    let (title, vocabulary) = tokio::join!(
        provider.generate_title(&title_request),
        provider.generate_vocabulary(&vocabulary_request)
    );

    let title = title.unwrap_or_else(|e| {
        warn!("failed to generate a title: {}", e);
        situation.clone()
    });

    Ok(Lesson::new(title, situation, language, vocabulary?))
}
