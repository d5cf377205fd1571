//! Lesson screen: the words and phrases for the chosen situation.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Tabs, Wrap},
};

use crate::app::{App, VocabularyTab};
use crate::models::VocabularyEntry;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(lesson) = app.lesson() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(lesson.title.as_str(), Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("  ·  {}", lesson.language),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(header, chunks[0]);

    if lesson.is_empty() {
        render_empty(frame, chunks[2]);
    } else {
        render_tabs(frame, chunks[1], app);
        render_entries(frame, chunks[2], &app.visible_entries(), app.vocabulary_scroll());
    }

    if let Some(notice) = app.notice() {
        let widget = Paragraph::new(notice)
            .alignment(Alignment::Center)
            .fg(Color::Yellow);
        frame.render_widget(widget, chunks[3]);
    }

    let widget = Paragraph::new(
        "tab words/phrases  ·  j/k scroll  ·  m more vocabulary  ·  enter quiz  ·  q quit",
    )
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(widget, chunks[4]);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let (words, phrases) = app
        .lesson()
        .map(|l| (l.words().count(), l.phrases().count()))
        .unwrap_or_default();
    let selected = match app.tab() {
        VocabularyTab::Words => 0,
        VocabularyTab::Phrases => 1,
    };

    let tabs = Tabs::new(vec![
        format!("Words ({})", words),
        format!("Phrases ({})", phrases),
    ])
    .select(selected)
    .style(Style::default().fg(Color::Gray))
    .highlight_style(Style::default().fg(Color::Cyan).bold())
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(tabs, area);
}

fn render_entries(frame: &mut Frame, area: Rect, entries: &[&VocabularyEntry], scroll: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(entries.len() * 4);

    for entry in entries.iter().skip(scroll) {
        let mut heading = vec![Span::styled(
            entry.word_phrase.as_str(),
            Style::default().fg(Color::White).bold(),
        )];
        if !entry.translation.is_empty() {
            heading.push(Span::styled(
                format!("  {}", entry.translation),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(heading));
        lines.push(Line::from(Span::styled(
            format!("  \"{}\"", entry.example_sentence),
            Style::default().fg(Color::Yellow).italic(),
        )));
        if !entry.example_sentence_translation.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  \"{}\"", entry.example_sentence_translation),
                Style::default().fg(Color::DarkGray).italic(),
            )));
        }
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No Vocabulary Found",
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(""),
        Line::from(
            "We couldn't find vocabulary for this situation. Press esc to try a different one."
                .fg(Color::DarkGray),
        ),
    ];
    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}
