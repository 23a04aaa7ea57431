//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::KeypadApp;
use super::keypad::KeypadWidget;
use crate::core::ERROR_INDICATOR;

/// Renders the keypad UI to the frame
pub fn render(app: &KeypadApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(KeypadUI::new(app), area);
}

/// Where the keypad grid lands for a given frame area, for mouse hit tests
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    horizontal_layout(area)[1]
}

fn horizontal_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(24),    // Display
            Constraint::Length(17), // Keypad
            Constraint::Length(22), // Help
        ])
        .split(area)
        .to_vec()
}

/// Keypad UI widget
#[derive(Debug)]
pub struct KeypadUI<'a> {
    app: &'a KeypadApp,
}

impl<'a> KeypadUI<'a> {
    /// Creates a new UI widget
    #[must_use]
    pub fn new(app: &'a KeypadApp) -> Self {
        Self { app }
    }

    fn create_layout(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Display
                Constraint::Length(3), // Status
                Constraint::Min(0),
            ])
            .split(area)
            .to_vec()
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let text = self.app.display();
        let style = if text == ERROR_INDICATOR {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(text, style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().bg(Color::Black))
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let max = format!("max {}", self.app.controller().max_digits());
        Paragraph::new(Line::from(vec![
            Span::styled(self.app.status(), Style::default().fg(Color::Cyan)),
            Span::raw("  "),
            Span::styled(max, Style::default().fg(Color::DarkGray)),
        ]))
        .block(
            Block::default()
                .title(" Status ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>7}", key), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for KeypadUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let h_chunks = horizontal_layout(area);
        let chunks = self.create_layout(h_chunks[0]);

        self.render_display(chunks[0], buf);
        self.render_status(chunks[1], buf);
        KeypadWidget::new(self.app.keypad()).render(h_chunks[1], buf);
        self.render_help(h_chunks[2], buf);
    }
}

/// Window title
pub const TITLE: &str = " Keypad ";

/// Key bindings shown in the help panel
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9", "Digit"),
    ("+", "Plus"),
    ("-", "Minus"),
    ("Enter/=", "Evaluate"),
    ("Esc/C", "Clear"),
    ("q", "Quit"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InputEvent, KeypadController};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn create_test_terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(80, 24)).unwrap()
    }

    fn rendered(app: &KeypadApp) -> String {
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_render_empty() {
        let content = rendered(&KeypadApp::new());
        assert!(content.contains("Display"));
        assert!(content.contains("Entering"));
        assert!(content.contains("[5]"));
        assert!(content.contains("Help"));
    }

    #[test]
    fn test_render_buffer() {
        let mut app = KeypadApp::new();
        for d in [4, 2, 7] {
            app.press(InputEvent::Digit(d));
        }
        assert!(rendered(&app).contains("427"));
    }

    #[test]
    fn test_render_result() {
        let mut app = KeypadApp::new();
        for event in InputEvent::parse_script("9-4=").unwrap() {
            app.press(event);
        }
        let content = rendered(&app);
        assert!(content.contains("5.0"));
        assert!(content.contains("Result"));
    }

    #[test]
    fn test_render_error() {
        let mut app = KeypadApp::new();
        app.press(InputEvent::Plus);
        assert!(rendered(&app).contains(ERROR_INDICATOR));
    }

    #[test]
    fn test_render_max_digits() {
        let app = KeypadApp::with_controller(KeypadController::with_max_digits(7).unwrap());
        assert!(rendered(&app).contains("max 7"));
    }

    #[test]
    fn test_keypad_area_matches_render() {
        let area = Rect::new(0, 0, 80, 24);
        let keypad = keypad_area(area);
        assert_eq!(keypad.y, 1);
        assert!(keypad.x > area.x);

        // clicking the first cell of the rendered keypad presses "1"
        let mut app = KeypadApp::new();
        app.click(keypad, keypad.x + 1, keypad.y + 1);
        assert_eq!(app.display(), "1");
    }

    #[test]
    fn test_render_small_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
        let app = KeypadApp::new();
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }
}
