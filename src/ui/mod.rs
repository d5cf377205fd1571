mod form;
mod quiz;
mod result;
mod vocabulary;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Form => form::render(frame, area, app),
        AppState::Vocabulary => vocabulary::render(frame, area, app),
        AppState::Quiz => quiz::render(frame, area, app),
        AppState::Result => result::render(frame, area, app),
    }

    if let Some(message) = app.loading() {
        render_loading(frame, area, message);
    }
}

fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let width = (message.chars().count() as u16 + 6).min(area.width);
    let popup = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(3) / 2,
        width,
        height: 3.min(area.height),
    };

    let widget = Paragraph::new(message)
        .alignment(Alignment::Center)
        .fg(Color::Yellow)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::lesson::Lesson;
    use crate::models::VocabularyEntry;
    use crate::quiz::QuizBuilder;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn app() -> App {
        let vocabulary = ["uno", "dos", "tres", "cuatro", "cinco"]
            .iter()
            .map(|w| VocabularyEntry::new(*w, format!("Frase con {}.", w)))
            .collect();
        App::with_lesson(
            QuizBuilder::new(),
            StdRng::seed_from_u64(3),
            Lesson::new("Counting", "counting", "Spanish", vocabulary),
        )
    }

    #[test]
    fn test_render_form() {
        let screen = draw(&App::new(QuizBuilder::new(), StdRng::seed_from_u64(0)));
        assert!(screen.contains("LINGUAQUIZ"));
    }

    #[test]
    fn test_render_screens() {
        let mut app = app();
        assert!(draw(&app).contains("Counting"));

        app.start_quiz();
        assert!(draw(&app).contains("What is the correct example for"));

        while app.state == AppState::Quiz {
            app.submit_answer();
        }
        assert!(draw(&app).contains("QUIZ COMPLETE"));

        app.set_loading(Some("Fetching more vocabulary..."));
        assert!(draw(&app).contains("Fetching more vocabulary..."));
    }
}
