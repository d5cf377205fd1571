//! # linguaquiz
//!
//! Vocabulary practice for real-world situations: pick a situation and a
//! target language, browse the words and phrases for it, then take a
//! multiple-choice quiz matching each word to its example sentence.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use linguaquiz::{BankProvider, LessonRunner, QuizError, load_bank_from_json};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let bank = load_bank_from_json("lessons.json")?;
//!     let runner = LessonRunner::new(Box::new(BankProvider::new(bank)));
//!     runner.run().await
//! }
//! ```
//!
//! The quiz builder can be used on its own:
//!
//! ```rust
//! use linguaquiz::{VocabularyEntry, build_quiz};
//!
//! let vocabulary = vec![
//!     VocabularyEntry::new("A", "a1"),
//!     VocabularyEntry::new("B", "b1"),
//!     VocabularyEntry::new("C", "c1"),
//!     VocabularyEntry::new("D", "d1"),
//! ];
//! let questions = build_quiz(&vocabulary, 6);
//! assert_eq!(questions.len(), 4);
//! ```

mod app;
mod data;
mod lesson;
mod models;
mod provider;
pub mod quiz;
mod session;
pub mod terminal;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

pub use app::{App, FormField, VocabularyTab};
pub use data::{load_bank_from_json, parse_bank, LessonBank, LoadError, Topic};
pub use lesson::Lesson;
pub use models::{AppState, EntryKind, QuizQuestion, VocabularyEntry};
pub use provider::{
    open_lesson, BankProvider, FormErrors, ProviderError, RegenerateRequest, SituationForm,
    TitleRequest, VocabularyProvider, VocabularyRequest, DEFAULT_NUM_RESULTS,
};
pub use quiz::{build_quiz, BuildReport, DistractorPolicy, QuizBuilder, DEFAULT_NUM_QUESTIONS};
pub use session::QuizSession;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to load lessons: {0}")]
    Load(#[from] LoadError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Vocabulary unavailable: {0}")]
    Provider(#[from] ProviderError),
}

/// Something the event loop must do outside of plain state updates.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    None,
    Quit,
    OpenLesson(SituationForm),
    MoreVocabulary,
}

/// Runs a lesson in the terminal, fetching vocabulary from a provider.
pub struct LessonRunner {
    app: App,
    provider: Box<dyn VocabularyProvider>,
    num_results: usize,
}

impl LessonRunner {
    pub fn new(provider: Box<dyn VocabularyProvider>) -> Self {
        Self {
            app: App::new(QuizBuilder::new(), StdRng::from_entropy()),
            provider,
            num_results: DEFAULT_NUM_RESULTS,
        }
    }

    pub fn with_builder(mut self, builder: QuizBuilder, rng: StdRng) -> Self {
        self.app = App::new(builder, rng);
        self
    }

    pub fn num_results(mut self, num_results: usize) -> Self {
        self.num_results = num_results;
        self
    }

    /// Opens a lesson before the UI starts, skipping the situation form.
    pub async fn open(&mut self, form: SituationForm) -> Result<(), QuizError> {
        let lesson = open_lesson(self.provider.as_ref(), &form, self.num_results).await?;
        self.app.set_lesson(lesson);
        Ok(())
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Run the lesson in the terminal.
    ///
    /// This will take over the terminal and return when the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = self.event_loop(&mut term).await;
        terminal::restore()?;
        result
    }

    async fn event_loop(&mut self, term: &mut terminal::AppTerminal) -> Result<(), QuizError> {
        loop {
            term.draw(|frame| ui::render(frame, &self.app))?;

            if !event::poll(Duration::from_millis(50))? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match handle_input(&mut self.app, key.code) {
                Action::None => {}
                Action::Quit => break,
                Action::OpenLesson(form) => {
                    self.app.set_loading(Some("Building your lesson..."));
                    term.draw(|frame| ui::render(frame, &self.app))?;
                    let result =
                        open_lesson(self.provider.as_ref(), &form, self.num_results).await;
                    self.app.set_loading(None);
                    match result {
                        Ok(lesson) => self.app.set_lesson(lesson),
                        Err(e) => {
                            warn!("failed to open lesson: {}", e);
                            self.app.set_form_error(e.to_string());
                        }
                    }
                }
                Action::MoreVocabulary => self.fetch_more(term).await?,
            }
        }

        Ok(())
    }

    async fn fetch_more(&mut self, term: &mut terminal::AppTerminal) -> Result<(), QuizError> {
        let Some(lesson) = self.app.lesson() else {
            return Ok(());
        };
        let request = RegenerateRequest::for_lesson(lesson);

        self.app.set_loading(Some("Fetching more vocabulary..."));
        term.draw(|frame| ui::render(frame, &self.app))?;
        let result = self.provider.regenerate_vocabulary(&request).await;
        self.app.set_loading(None);

        match result {
            Ok(entries) => {
                self.app.extend_vocabulary(entries);
            }
            Err(e) => {
                warn!("failed to regenerate vocabulary: {}", e);
                self.app.set_notice(e.to_string());
            }
        }
        Ok(())
    }
}

fn handle_input(app: &mut App, key: KeyCode) -> Action {
    if app.loading().is_some() {
        return Action::None;
    }
    match app.state {
        AppState::Form => handle_form_input(app, key),
        AppState::Vocabulary => handle_vocabulary_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_form_input(app: &mut App, key: KeyCode) -> Action {
    match key {
        KeyCode::Esc => Action::Quit,
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_form_field();
            Action::None
        }
        KeyCode::Backspace => {
            app.form_input_pop();
            Action::None
        }
        KeyCode::Enter => match app.form().validate() {
            Ok(()) => Action::OpenLesson(app.form().clone()),
            Err(errors) => {
                app.set_form_error(errors.to_string());
                Action::None
            }
        },
        KeyCode::Char(c) => {
            app.form_input_push(c);
            Action::None
        }
        _ => Action::None,
    }
}

fn handle_vocabulary_input(app: &mut App, key: KeyCode) -> Action {
    match key {
        KeyCode::Tab | KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
            app.toggle_tab();
            Action::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_vocabulary_down();
            Action::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_vocabulary_up();
            Action::None
        }
        KeyCode::Enter => {
            app.start_quiz();
            Action::None
        }
        KeyCode::Char('m') | KeyCode::Char('M') => Action::MoreVocabulary,
        KeyCode::Esc | KeyCode::Backspace => {
            app.back_to_form();
            Action::None
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
        _ => Action::None,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> Action {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.session_mut().select_previous_option();
            Action::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.session_mut().select_next_option();
            Action::None
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_answer();
            Action::None
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart_quiz();
            Action::None
        }
        KeyCode::Esc => {
            app.back_to_vocabulary();
            Action::None
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
        _ => Action::None,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> Action {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.session_mut().scroll_results_down();
            Action::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.session_mut().scroll_results_up();
            Action::None
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart_quiz();
            Action::None
        }
        KeyCode::Char('v') | KeyCode::Char('V') | KeyCode::Esc => {
            app.back_to_vocabulary();
            Action::None
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
        _ => Action::None,
    }
}
