use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::lesson::Lesson;
use crate::models::{AppState, VocabularyEntry};
use crate::provider::SituationForm;
use crate::quiz::{QuizBuilder, MIN_VOCABULARY};
use crate::session::QuizSession;

/// Which form field receives typed characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Situation,
    Language,
}

/// Which slice of the vocabulary is listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VocabularyTab {
    #[default]
    Words,
    Phrases,
}

pub struct App {
    pub state: AppState,
    form: SituationForm,
    form_field: FormField,
    form_error: Option<String>,
    lesson: Option<Lesson>,
    tab: VocabularyTab,
    vocabulary_scroll: usize,
    builder: QuizBuilder,
    rng: StdRng,
    session: QuizSession,
    notice: Option<String>,
    loading: Option<&'static str>,
}

impl App {
    pub fn new(builder: QuizBuilder, rng: StdRng) -> Self {
        Self {
            state: AppState::Form,
            form: SituationForm::default(),
            form_field: FormField::default(),
            form_error: None,
            lesson: None,
            tab: VocabularyTab::default(),
            vocabulary_scroll: 0,
            builder,
            rng,
            session: QuizSession::default(),
            notice: None,
            loading: None,
        }
    }

    pub fn with_lesson(builder: QuizBuilder, rng: StdRng, lesson: Lesson) -> Self {
        let mut app = Self::new(builder, rng);
        app.set_lesson(lesson);
        app
    }

    pub fn form(&self) -> &SituationForm {
        &self.form
    }

    pub fn set_form(&mut self, form: SituationForm) {
        self.form = form;
    }

    pub fn form_field(&self) -> FormField {
        self.form_field
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn set_form_error(&mut self, error: impl Into<String>) {
        self.form_error = Some(error.into());
    }

    fn focused_input(&mut self) -> &mut String {
        match self.form_field {
            FormField::Situation => &mut self.form.situation,
            FormField::Language => &mut self.form.language,
        }
    }

    pub fn form_input_push(&mut self, c: char) {
        self.form_error = None;
        self.focused_input().push(c);
    }

    pub fn form_input_pop(&mut self) {
        self.form_error = None;
        self.focused_input().pop();
    }

    pub fn toggle_form_field(&mut self) {
        self.form_field = match self.form_field {
            FormField::Situation => FormField::Language,
            FormField::Language => FormField::Situation,
        };
    }

    pub fn back_to_form(&mut self) {
        self.state = AppState::Form;
        self.notice = None;
    }

    pub fn lesson(&self) -> Option<&Lesson> {
        self.lesson.as_ref()
    }

    /// Installs a freshly opened lesson and prepares its first quiz.
    pub fn set_lesson(&mut self, lesson: Lesson) {
        info!(
            "lesson {:?} opened with {} entries",
            lesson.title,
            lesson.vocabulary.len()
        );
        self.form = SituationForm::new(lesson.situation.clone(), lesson.language.clone());
        self.lesson = Some(lesson);
        self.tab = VocabularyTab::Words;
        self.vocabulary_scroll = 0;
        self.notice = None;
        self.state = AppState::Vocabulary;
        self.regenerate_quiz();
    }

    /// Adds new vocabulary to the lesson and rebuilds the quiz over it.
    pub fn extend_vocabulary(&mut self, entries: Vec<VocabularyEntry>) -> usize {
        let Some(lesson) = self.lesson.as_mut() else {
            return 0;
        };
        let added = lesson.extend(entries);
        self.regenerate_quiz();

        let summary = format!("Added {} new entries.", added);
        self.notice = Some(match self.notice.take() {
            Some(quiz_notice) => format!("{} {}", summary, quiz_notice),
            None => summary,
        });
        added
    }

    pub fn tab(&self) -> VocabularyTab {
        self.tab
    }

    pub fn toggle_tab(&mut self) {
        self.tab = match self.tab {
            VocabularyTab::Words => VocabularyTab::Phrases,
            VocabularyTab::Phrases => VocabularyTab::Words,
        };
        self.vocabulary_scroll = 0;
    }

    /// Entries shown under the current tab.
    pub fn visible_entries(&self) -> Vec<&VocabularyEntry> {
        let Some(lesson) = &self.lesson else {
            return Vec::new();
        };
        match self.tab {
            VocabularyTab::Words => lesson.words().collect(),
            VocabularyTab::Phrases => lesson.phrases().collect(),
        }
    }

    pub fn vocabulary_scroll(&self) -> usize {
        self.vocabulary_scroll
    }

    pub fn scroll_vocabulary_down(&mut self) {
        if self.vocabulary_scroll + 1 < self.visible_entries().len() {
            self.vocabulary_scroll += 1;
        }
    }

    pub fn scroll_vocabulary_up(&mut self) {
        self.vocabulary_scroll = self.vocabulary_scroll.saturating_sub(1);
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut QuizSession {
        &mut self.session
    }

    /// Builds a new question list from the lesson's vocabulary.
    ///
    /// Returns false when the vocabulary cannot form a single question.
    pub fn regenerate_quiz(&mut self) -> bool {
        let vocabulary = self
            .lesson
            .as_ref()
            .map(|l| l.vocabulary.as_slice())
            .unwrap_or_default();
        let report = self.builder.build_with_report(vocabulary, &mut self.rng);

        self.notice = if report.insufficient_vocabulary() {
            Some(format!(
                "A quiz needs at least {} vocabulary entries.",
                MIN_VOCABULARY
            ))
        } else if report.skipped > 0 {
            Some(format!(
                "{} entries lacked distinct distractors and were left out.",
                report.skipped
            ))
        } else {
            None
        };

        self.session.replace(report.questions);
        !self.session.is_empty()
    }

    pub fn start_quiz(&mut self) {
        if self.session.is_empty() {
            self.notice = Some("Not enough vocabulary to build a quiz.".to_string());
            return;
        }
        self.state = AppState::Quiz;
    }

    /// Starts over with a new question list from the same vocabulary.
    pub fn restart_quiz(&mut self) {
        if self.regenerate_quiz() {
            self.state = AppState::Quiz;
        } else {
            self.state = AppState::Vocabulary;
        }
    }

    pub fn back_to_vocabulary(&mut self) {
        self.state = AppState::Vocabulary;
    }

    /// Answers with the highlighted option, or moves on if already answered.
    pub fn submit_answer(&mut self) {
        if self.session.showing_feedback() {
            self.session.next_question();
            if self.session.is_finished() {
                info!(
                    "quiz finished: {}/{}",
                    self.session.score(),
                    self.session.total_questions()
                );
                self.state = AppState::Result;
            }
        } else {
            self.session.submit_cursor();
        }
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn loading(&self) -> Option<&'static str> {
        self.loading
    }

    pub fn set_loading(&mut self, message: Option<&'static str>) {
        self.loading = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(len: usize) -> Lesson {
        let vocabulary = (0..len)
            .map(|i| {
                let entry = VocabularyEntry::new(format!("w{}", i), format!("s{}", i));
                if i % 2 == 0 { entry } else { entry.phrase() }
            })
            .collect();
        Lesson::new("Title", "situation", "French", vocabulary)
    }

    fn app(len: usize) -> App {
        App::with_lesson(
            QuizBuilder::new().num_questions(3),
            StdRng::seed_from_u64(1),
            lesson(len),
        )
    }

    #[test]
    fn test_lesson_prepares_quiz() {
        let app = app(6);
        assert_eq!(app.state, AppState::Vocabulary);
        assert_eq!(app.session().total_questions(), 3);
        assert_eq!(app.form().language, "French");
        assert!(app.notice().is_none());
    }

    #[test]
    fn test_small_lesson_cannot_start_quiz() {
        let mut app = app(3);
        assert!(app.session().is_empty());
        assert!(app.notice().is_some());

        app.start_quiz();
        assert_eq!(app.state, AppState::Vocabulary);
    }

    #[test]
    fn test_play_through() {
        let mut app = app(6);
        app.start_quiz();
        assert_eq!(app.state, AppState::Quiz);

        for _ in 0..3 {
            app.submit_answer();
            assert!(app.session().showing_feedback());
            app.submit_answer();
        }

        assert_eq!(app.state, AppState::Result);
        assert!(app.session().is_finished());

        app.restart_quiz();
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.session().score(), 0);
    }

    #[test]
    fn test_extend_vocabulary_enables_quiz() {
        let mut app = app(3);
        let added = app.extend_vocabulary(vec![
            VocabularyEntry::new("w0", "duplicate key"),
            VocabularyEntry::new("new", "fresh sentence"),
        ]);

        assert_eq!(added, 1);
        assert_eq!(app.session().total_questions(), 3);
        assert_eq!(app.notice(), Some("Added 1 new entries."));
    }

    #[test]
    fn test_extend_vocabulary_keeps_quiz_notice() {
        let mut app = app(2);
        let added = app.extend_vocabulary(vec![VocabularyEntry::new("new", "fresh sentence")]);

        assert_eq!(added, 1);
        assert!(app.session().is_empty());
        assert_eq!(
            app.notice(),
            Some("Added 1 new entries. A quiz needs at least 4 vocabulary entries.")
        );
    }

    #[test]
    fn test_tabs_split_entries() {
        let mut app = app(5);
        assert_eq!(app.visible_entries().len(), 3);
        app.scroll_vocabulary_down();
        app.toggle_tab();
        assert_eq!(app.tab(), VocabularyTab::Phrases);
        assert_eq!(app.vocabulary_scroll(), 0);
        assert_eq!(app.visible_entries().len(), 2);
    }

    #[test]
    fn test_form_input_goes_to_focused_field() {
        let mut app = App::new(QuizBuilder::new(), StdRng::seed_from_u64(0));
        for c in "cafe".chars() {
            app.form_input_push(c);
        }
        app.toggle_form_field();
        app.form_input_push('f');
        app.form_input_push('r');
        app.form_input_pop();

        assert_eq!(app.form().situation, "cafe");
        assert_eq!(app.form().language, "f");
        assert_eq!(app.form_field(), FormField::Language);
    }
}
