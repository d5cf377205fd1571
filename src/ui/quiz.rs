use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::QuizQuestion;
use crate::session::QuizSession;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let Some(question) = session.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], session);
    render_prompt(frame, chunks[1], &question.prompt);
    render_options(frame, chunks[2], question, session);
    render_gauge(frame, chunks[3], session);
    render_controls(frame, chunks[4], session);
}

fn render_progress(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let progress = format!(
        "Question {} of {}",
        session.current_question_number(),
        session.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    let line = Line::from(vec![
        Span::styled(
            "What is the correct example for: ",
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("\"{}\"", prompt),
            Style::default().fg(Color::Cyan).bold(),
        ),
        Span::styled("?", Style::default().fg(Color::White)),
    ]);
    let widget = Paragraph::new(line).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, question: &QuizQuestion, session: &QuizSession) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);
    let selected = session.selected_answer();

    for (index, option) in question.options.iter().enumerate() {
        let is_cursor = index == session.cursor();
        let is_selected = selected == Some(option.as_str());
        let is_correct = question.is_correct(option);

        let (style, mark) = match selected {
            None if is_cursor => (Style::default().fg(Color::Cyan).bold(), ""),
            None => (Style::default().fg(Color::Gray), ""),
            Some(_) if is_correct => (Style::default().fg(Color::Green).bold(), "  ✓"),
            Some(_) if is_selected => (Style::default().fg(Color::Red).bold(), "  ✗"),
            Some(_) => (Style::default().fg(Color::DarkGray), ""),
        };
        let marker = if is_cursor { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
            Span::styled(mark, style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_gauge(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let percent = session.progress_percent().round().clamp(0.0, 100.0) as u16;
    let widget = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .percent(percent)
        .label("");
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let text = if !session.showing_feedback() {
        "j/k navigate  ·  enter select  ·  r new quiz  ·  esc vocabulary  ·  q quit"
    } else if session.is_last_question() {
        "enter finish quiz  ·  r new quiz  ·  q quit"
    } else {
        "enter next question  ·  r new quiz  ·  q quit"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
