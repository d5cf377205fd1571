//! Progress through one generated question list.

use crate::models::QuizQuestion;

const NUM_OPTIONS: usize = 4;

/// Per-run quiz state: which question is shown, what was picked, the score.
///
/// A session is tied to one question list; supplying a new list through
/// [`QuizSession::replace`] starts over from the first question.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    current_question_index: usize,
    cursor: usize,
    selected_answer: Option<String>,
    score: usize,
    finished: bool,
    answers: Vec<Option<String>>,
    result_scroll: usize,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let num_questions = questions.len();
        Self {
            questions,
            answers: vec![None; num_questions],
            ..Self::default()
        }
    }

    pub fn replace(&mut self, questions: Vec<QuizQuestion>) {
        *self = Self::new(questions);
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<String>] {
        &self.answers
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_question_index)
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    /// True once an option was picked for the current question.
    pub fn showing_feedback(&self) -> bool {
        self.selected_answer.is_some()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_last_question(&self) -> bool {
        self.current_question_index + 1 >= self.questions.len()
    }

    pub fn select_next_option(&mut self) {
        if !self.showing_feedback() {
            self.cursor = (self.cursor + 1) % NUM_OPTIONS;
        }
    }

    pub fn select_previous_option(&mut self) {
        if !self.showing_feedback() {
            self.cursor = (self.cursor + NUM_OPTIONS - 1) % NUM_OPTIONS;
        }
    }

    /// Records `answer` for the current question.
    ///
    /// Returns whether it was correct, or `None` if an answer was already
    /// given or the quiz is over.
    pub fn select(&mut self, answer: &str) -> Option<bool> {
        if self.finished || self.showing_feedback() {
            return None;
        }
        let correct = self.current_question()?.is_correct(answer);

        if correct {
            self.score += 1;
        }
        self.selected_answer = Some(answer.to_string());
        self.answers[self.current_question_index] = Some(answer.to_string());
        Some(correct)
    }

    /// Selects the option under the cursor.
    pub fn submit_cursor(&mut self) -> Option<bool> {
        let answer = self.current_question()?.options.get(self.cursor)?.clone();
        self.select(&answer)
    }

    /// Moves past the answered question, finishing after the last one.
    pub fn next_question(&mut self) {
        if self.finished || !self.showing_feedback() {
            return;
        }

        if self.is_last_question() {
            self.finished = true;
        } else {
            self.current_question_index += 1;
            self.cursor = 0;
            self.selected_answer = None;
        }
    }

    /// Completion in percent; the final question counts once finished.
    pub fn progress_percent(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        let done = if self.finished {
            self.current_question_index + 1
        } else {
            self.current_question_index
        };
        done as f64 / self.questions.len() as f64 * 100.0
    }

    /// Whether the recorded answer for question `index` matches its correct answer.
    pub fn answered_correctly(&self, index: usize) -> bool {
        match (self.questions.get(index), self.answers.get(index)) {
            (Some(question), Some(Some(answer))) => question.is_correct(answer),
            _ => false,
        }
    }

    /// Lines in the result breakdown: one per question, plus the correct
    /// answer under each question that was missed.
    pub fn result_line_count(&self) -> usize {
        (0..self.questions.len())
            .map(|index| if self.answered_correctly(index) { 1 } else { 2 })
            .sum()
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn scroll_results_down(&mut self) {
        if self.result_scroll + 1 < self.result_line_count() {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(prompt: &str, correct: &str) -> QuizQuestion {
        let mut options = ["w", "x", "y", "z"].map(String::from);
        options[2] = correct.to_string();
        QuizQuestion {
            prompt: prompt.to_string(),
            options,
            correct_answer: correct.to_string(),
        }
    }

    fn session() -> QuizSession {
        QuizSession::new(vec![question("A", "a1"), question("B", "b1")])
    }

    #[test]
    fn test_answer_and_advance() {
        let mut session = session();
        assert_eq!(session.progress_percent(), 0.0);

        assert_eq!(session.select("a1"), Some(true));
        assert!(session.showing_feedback());
        assert_eq!(session.score(), 1);

        session.next_question();
        assert_eq!(session.current_question_number(), 2);
        assert!(!session.showing_feedback());
        assert_eq!(session.progress_percent(), 50.0);

        assert_eq!(session.select("w"), Some(false));
        assert!(session.is_last_question());
        session.next_question();

        assert!(session.is_finished());
        assert_eq!(session.score(), 1);
        assert_eq!(session.progress_percent(), 100.0);
        assert_eq!(
            session.answers(),
            &[Some("a1".to_string()), Some("w".to_string())]
        );
    }

    #[test]
    fn test_second_selection_ignored() {
        let mut session = session();
        session.select("a1");
        assert_eq!(session.select("w"), None);
        assert_eq!(session.selected_answer(), Some("a1"));
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_cannot_advance_without_answer() {
        let mut session = session();
        session.next_question();
        assert_eq!(session.current_question_number(), 1);
    }

    #[test]
    fn test_cursor_wraps_and_submits() {
        let mut session = session();
        session.select_previous_option();
        assert_eq!(session.cursor(), 3);
        session.select_next_option();
        session.select_next_option();
        session.select_next_option();
        assert_eq!(session.cursor(), 2);

        assert_eq!(session.submit_cursor(), Some(true));
        // Cursor is frozen while feedback is shown.
        session.select_next_option();
        assert_eq!(session.cursor(), 2);
    }

    #[test]
    fn test_replace_resets_progress() {
        let mut session = session();
        session.select("a1");
        session.next_question();

        session.replace(vec![question("C", "c1")]);
        assert_eq!(session.current_question_number(), 1);
        assert_eq!(session.score(), 0);
        assert!(!session.is_finished());
        assert_eq!(session.answers(), &[None::<String>]);
    }

    #[test]
    fn test_empty_session() {
        let mut session = QuizSession::new(Vec::new());
        assert!(session.is_empty());
        assert!(session.current_question().is_none());
        assert_eq!(session.select("a"), None);
        assert_eq!(session.submit_cursor(), None);
        assert_eq!(session.progress_percent(), 0.0);
    }

    #[test]
    fn test_result_scroll_bounds() {
        let mut session = session();
        session.scroll_results_up();
        assert_eq!(session.result_scroll(), 0);
        session.select("a1");
        session.next_question();
        session.select("b1");
        session.next_question();
        assert_eq!(session.result_line_count(), 2);

        session.scroll_results_down();
        session.scroll_results_down();
        assert_eq!(session.result_scroll(), 1);
    }

    #[test]
    fn test_result_scroll_reaches_missed_answers() {
        let mut session = QuizSession::new(vec![
            question("A", "a1"),
            question("B", "b1"),
            question("C", "c1"),
        ]);
        session.select("w");
        session.next_question();
        session.select("b1");
        session.next_question();
        session.select("x");
        session.next_question();
        assert!(session.is_finished());

        assert!(!session.answered_correctly(0));
        assert!(session.answered_correctly(1));
        assert_eq!(session.result_line_count(), 5);

        for _ in 0..10 {
            session.scroll_results_down();
        }
        assert_eq!(session.result_scroll(), 4);
    }
}
