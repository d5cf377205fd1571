use std::collections::HashSet;

use log::debug;

use crate::models::{QuizQuestion, VocabularyEntry};

use super::random::{shuffle, RandomSource};

/// Number of questions generated when the caller does not ask for more.
pub const DEFAULT_NUM_QUESTIONS: usize = 6;

/// Smallest vocabulary that can produce a question: one correct answer plus
/// three distractors drawn from other entries.
pub const MIN_VOCABULARY: usize = 4;

const DISTRACTORS_PER_QUESTION: usize = 3;

/// How the distractor pool for a question is assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DistractorPolicy {
    /// Drop repeated sentences and sentences equal to the correct answer,
    /// so the four options are always pairwise distinct. A word/phrase that
    /// appears in several entries is asked about once.
    #[default]
    Distinct,
    /// Use every other entry's sentence as-is. Repeated sentences in the
    /// vocabulary can surface as repeated options, and repeated
    /// word/phrases as repeated prompts.
    Raw,
}

/// Outcome of a build, including why fewer questions may have been produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub questions: Vec<QuizQuestion>,
    /// Question count the caller asked for.
    pub requested: usize,
    /// Requested count clamped to the vocabulary size; zero when the
    /// vocabulary is too small.
    pub target: usize,
    /// Entries dropped because fewer than three distractors were available.
    pub skipped: usize,
}

impl BuildReport {
    pub fn insufficient_vocabulary(&self) -> bool {
        self.target == 0 && self.requested > 0
    }

    /// True when every entry within the clamped target became a question.
    pub fn is_complete(&self) -> bool {
        self.questions.len() == self.target
    }
}

/// Builds multiple-choice quizzes from a vocabulary snapshot.
#[derive(Debug, Clone)]
pub struct QuizBuilder {
    num_questions: usize,
    policy: DistractorPolicy,
}

impl Default for QuizBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizBuilder {
    pub fn new() -> Self {
        Self {
            num_questions: DEFAULT_NUM_QUESTIONS,
            policy: DistractorPolicy::default(),
        }
    }

    pub fn num_questions(mut self, num_questions: usize) -> Self {
        self.num_questions = num_questions;
        self
    }

    pub fn distractor_policy(mut self, policy: DistractorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build<R: RandomSource + ?Sized>(
        &self,
        vocabulary: &[VocabularyEntry],
        rng: &mut R,
    ) -> Vec<QuizQuestion> {
        self.build_with_report(vocabulary, rng).questions
    }

    /// Builds a quiz and reports how many entries could not become questions.
    ///
    /// Never fails: a vocabulary with fewer than [`MIN_VOCABULARY`] entries
    /// yields no questions, and an entry without three usable distractors is
    /// skipped rather than emitted with fewer options.
    pub fn build_with_report<R: RandomSource + ?Sized>(
        &self,
        vocabulary: &[VocabularyEntry],
        rng: &mut R,
    ) -> BuildReport {
        let mut report = BuildReport {
            requested: self.num_questions,
            ..BuildReport::default()
        };

        if vocabulary.len() < MIN_VOCABULARY {
            debug!(
                "vocabulary of {} entries is too small for a quiz",
                vocabulary.len()
            );
            return report;
        }

        let mut order: Vec<&VocabularyEntry> = vocabulary.iter().collect();
        shuffle(&mut order, rng);

        report.target = self.num_questions.min(order.len());
        report.questions.reserve(report.target);
        let mut asked: HashSet<&str> = HashSet::with_capacity(report.target);

        for correct in order.into_iter().take(report.target) {
            if self.policy == DistractorPolicy::Distinct
                && !asked.insert(correct.word_phrase.as_str())
            {
                debug!("skipping repeated prompt {:?}", correct.word_phrase);
                report.skipped += 1;
                continue;
            }
            let mut pool = distractor_pool(vocabulary, correct, self.policy);
            if pool.len() < DISTRACTORS_PER_QUESTION {
                debug!(
                    "skipping {:?}: only {} distractors available",
                    correct.word_phrase,
                    pool.len()
                );
                report.skipped += 1;
                continue;
            }
            shuffle(&mut pool, rng);

            let mut options: Vec<String> = Vec::with_capacity(DISTRACTORS_PER_QUESTION + 1);
            options.push(correct.example_sentence.clone());
            options.extend(
                pool.into_iter()
                    .take(DISTRACTORS_PER_QUESTION)
                    .map(str::to_owned),
            );
            shuffle(&mut options, rng);

            let Ok(options) = <[String; 4]>::try_from(options) else {
                report.skipped += 1;
                continue;
            };

            report.questions.push(QuizQuestion {
                prompt: correct.word_phrase.clone(),
                options,
                correct_answer: correct.example_sentence.clone(),
            });
        }

        debug!(
            "built {} of {} questions ({} skipped)",
            report.questions.len(),
            report.target,
            report.skipped
        );
        report
    }
}

/// Sentences of every entry other than `correct`, compared by word/phrase.
fn distractor_pool<'a>(
    vocabulary: &'a [VocabularyEntry],
    correct: &VocabularyEntry,
    policy: DistractorPolicy,
) -> Vec<&'a str> {
    let others = vocabulary
        .iter()
        .filter(|entry| entry.word_phrase != correct.word_phrase)
        .map(|entry| entry.example_sentence.as_str());

    match policy {
        DistractorPolicy::Raw => others.collect(),
        DistractorPolicy::Distinct => {
            let mut seen: HashSet<&str> = HashSet::new();
            seen.insert(correct.example_sentence.as_str());
            others.filter(|sentence| seen.insert(*sentence)).collect()
        }
    }
}

/// Builds up to `num_questions` questions using the thread-local RNG.
pub fn build_quiz(vocabulary: &[VocabularyEntry], num_questions: usize) -> Vec<QuizQuestion> {
    QuizBuilder::new()
        .num_questions(num_questions)
        .build(vocabulary, &mut rand::thread_rng())
}
