//! Start screen: describe a situation and pick a language.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, FormField};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(14),
        Constraint::Fill(1),
    ])
    .split(area);

    let form = app.form();
    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "LINGUAQUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Vocabulary for real-world conversations".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(""),
        input_line(
            "Situation",
            &form.situation,
            app.form_field() == FormField::Situation,
        ),
        Line::from(""),
        input_line(
            "Language ",
            &form.language,
            app.form_field() == FormField::Language,
        ),
        Line::from(""),
    ];

    match app.form_error() {
        Some(err) => content.push(Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        ))),
        None => content.push(Line::from("")),
    }

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "[Tab] switch field  ·  [Enter] start learning  ·  [Esc] quit",
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}

fn input_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if focused { "_" } else { " " };

    Line::from(vec![
        Span::styled(format!("{}: ", label), label_style),
        Span::styled(value, Style::default().fg(Color::Yellow)),
        Span::styled(cursor, Style::default().fg(Color::Yellow)),
    ])
}
