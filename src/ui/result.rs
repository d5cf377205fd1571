use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::session::QuizSession;

const ANSWER_PREVIEW_LENGTH: usize = 45;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let score = session.score();
    let total = session.total_questions();
    let percentage = score_percentage(score, total);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], score, total, percentage);
    render_breakdown(frame, chunks[2], session);
    render_controls(frame, chunks[3]);
}

fn score_percentage(score: usize, total: usize) -> f64 {
    if total > 0 {
        (score as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

fn grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, score: usize, total: usize, percentage: f64) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ COMPLETE",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Your score: {} / {}  ({:.0}%)", score, total, percentage),
            Style::default().fg(grade_color(percentage)).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_breakdown(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let lines: Vec<Line> = session
        .questions()
        .iter()
        .enumerate()
        .flat_map(|(index, question)| {
            let is_correct = session.answered_correctly(index);
            let (symbol, color) = if is_correct {
                ("+", Color::Green)
            } else {
                ("-", Color::Red)
            };

            let mut lines = vec![Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(question.prompt.clone(), Style::default().fg(Color::White)),
            ])];
            if !is_correct {
                lines.push(Line::from(Span::styled(
                    format!("       {}", truncate(&question.correct_answer)),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((session.result_scroll() as u16, 0));
    frame.render_widget(widget, area);
}

fn truncate(text: &str) -> String {
    if text.chars().count() > ANSWER_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(ANSWER_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r try again  ·  v vocabulary  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_percentage() {
        assert_eq!(score_percentage(3, 4), 75.0);
        assert_eq!(score_percentage(0, 0), 0.0);
    }

    #[test]
    fn test_grade_color() {
        assert_eq!(grade_color(100.0), Color::Green);
        assert_eq!(grade_color(75.0), Color::Cyan);
        assert_eq!(grade_color(50.0), Color::Yellow);
        assert_eq!(grade_color(10.0), Color::Red);
    }

    #[test]
    fn test_breakdown_lines_match_session_count() {
        use ratatui::backend::TestBackend;
        use ratatui::Terminal;

        use crate::models::QuizQuestion;

        let question = |prompt: &str, correct: &str| QuizQuestion {
            prompt: prompt.to_string(),
            options: [correct, "x", "y", "z"].map(String::from),
            correct_answer: correct.to_string(),
        };
        let mut session = QuizSession::new(vec![question("A", "a1"), question("B", "b1")]);
        session.select("x");
        session.next_question();
        session.select("b1");
        session.next_question();
        assert_eq!(session.result_line_count(), 3);
        for _ in 0..5 {
            session.scroll_results_down();
        }

        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        terminal
            .draw(|frame| render_breakdown(frame, frame.area(), &session))
            .unwrap();
        let first_row: String = terminal.backend().buffer().content()[..40]
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(first_row.contains("B"), "{:?}", first_row);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short"), "short");
        let long = "é".repeat(60);
        assert_eq!(truncate(&long).chars().count(), ANSWER_PREVIEW_LENGTH + 3);
    }
}
