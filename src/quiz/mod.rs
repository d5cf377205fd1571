//! Multiple-choice quiz construction.
//!
//! Turns a vocabulary snapshot into questions that ask the learner to pick
//! the example sentence belonging to a word or phrase.

mod builder;
mod random;

pub use builder::{
    build_quiz, BuildReport, DistractorPolicy, QuizBuilder, DEFAULT_NUM_QUESTIONS,
    MIN_VOCABULARY,
};
pub use random::{shuffle, RandomSource, ScriptedSource};
