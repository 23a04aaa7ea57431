//! Clickable keypad grid
//!
//! Buttons can be clicked with the mouse, highlighted when the matching key
//! is pressed, and disabled while the digit lock is active.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::InputEvent;

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The event this button forwards
    pub event: InputEvent,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    /// Whether the button accepts activation
    pub enabled: bool,
}

impl KeypadButton {
    /// Creates an enabled, released button
    #[must_use]
    pub const fn new(event: InputEvent) -> Self {
        Self {
            event,
            pressed: false,
            enabled: true,
        }
    }

    /// The character printed on the button
    #[must_use]
    pub fn label(&self) -> char {
        self.event.label()
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout, a 5x3 grid with one empty cell
/// ```text
/// [ 1 ] [ 2 ] [ 3 ]
/// [ 4 ] [ 5 ] [ 6 ]
/// [ 7 ] [ 8 ] [ 9 ]
/// [ C ] [ 0 ] [ = ]
/// [ + ] [ - ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let mut buttons: Vec<KeypadButton> = (1..=9)
            .map(|d| KeypadButton::new(InputEvent::Digit(d)))
            .collect();
        buttons.extend(
            [
                InputEvent::Clear,
                InputEvent::Digit(0),
                InputEvent::Enter,
                InputEvent::Plus,
                InputEvent::Minus,
            ]
            .into_iter()
            .map(KeypadButton::new),
        );

        Self {
            buttons,
            cols: 3,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the button forwarding `event`
    #[must_use]
    pub fn find_button(&self, event: InputEvent) -> Option<usize> {
        self.buttons.iter().position(|b| b.event == event)
    }

    /// Sets a button as pressed by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights only the button forwarding `event`
    pub fn highlight(&mut self, event: InputEvent) {
        self.release_all();
        if let Some(idx) = self.find_button(event) {
            self.press_button(idx);
        }
    }

    /// Enables or disables every digit button
    pub fn set_digits_enabled(&mut self, enabled: bool) {
        for btn in self.buttons.iter_mut().filter(|b| b.event.is_digit()) {
            btn.enabled = enabled;
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // border
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;

        if row < self.rows && col < self.cols {
            let index = row * self.cols + col;
            (index < self.buttons.len()).then_some(index)
        } else {
            None
        }
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < self.keypad.cols as u16 || inner.height < self.keypad.rows as u16 {
            return;
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let style = if !btn.enabled {
                Style::default().fg(Color::DarkGray)
            } else if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.event {
                    InputEvent::Digit(_) => Style::default().fg(Color::White),
                    InputEvent::Plus | InputEvent::Minus => Style::default().fg(Color::Yellow),
                    InputEvent::Enter => Style::default().fg(Color::Green),
                    InputEvent::Clear => Style::default().fg(Color::Red),
                }
            };

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label());
                let label_x = x + (btn_width.saturating_sub(label.len() as u16)) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== KeypadButton tests =====

    #[test]
    fn test_button_new() {
        let btn = KeypadButton::new(InputEvent::Digit(4));
        assert_eq!(btn.label(), '4');
        assert!(!btn.pressed);
        assert!(btn.enabled);
    }

    #[test]
    fn test_button_pressed_state() {
        let mut btn = KeypadButton::new(InputEvent::Plus);
        btn.set_pressed(true);
        assert!(btn.pressed);
        btn.set_pressed(false);
        assert!(!btn.pressed);
    }

    // ===== Keypad tests =====

    #[test]
    fn test_keypad_new() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 14);
        assert_eq!(keypad.dimensions(), (5, 3));
    }

    #[test]
    fn test_keypad_layout() {
        let keypad = Keypad::new();
        let rows: Vec<String> = (0..5)
            .map(|row| {
                (0..3)
                    .filter_map(|col| keypad.get_button_at(row, col))
                    .map(KeypadButton::label)
                    .collect()
            })
            .collect();
        assert_eq!(rows, vec!["123", "456", "789", "C0=", "+-"]);
    }

    #[test]
    fn test_keypad_get_button_at_out_of_bounds() {
        let keypad = Keypad::new();
        assert!(keypad.get_button_at(4, 2).is_none());
        assert!(keypad.get_button_at(10, 0).is_none());
        assert!(keypad.get_button_at(0, 3).is_none());
    }

    #[test]
    fn test_keypad_find_button() {
        let keypad = Keypad::new();
        assert_eq!(keypad.find_button(InputEvent::Digit(1)), Some(0));
        assert_eq!(keypad.find_button(InputEvent::Digit(0)), Some(10));
        assert_eq!(keypad.find_button(InputEvent::Minus), Some(13));
    }

    #[test]
    fn test_keypad_highlight() {
        let mut keypad = Keypad::new();
        keypad.press_button(0);
        keypad.highlight(InputEvent::Enter);
        let pressed: Vec<_> = keypad.buttons().filter(|b| b.pressed).collect();
        assert_eq!(pressed.len(), 1);
        assert_eq!(pressed[0].event, InputEvent::Enter);
    }

    #[test]
    fn test_keypad_release_all() {
        let mut keypad = Keypad::new();
        keypad.press_button(2);
        keypad.press_button(7);
        keypad.release_all();
        assert!(keypad.buttons().all(|b| !b.pressed));
    }

    #[test]
    fn test_set_digits_enabled() {
        let mut keypad = Keypad::new();
        keypad.set_digits_enabled(false);
        for btn in keypad.buttons() {
            assert_eq!(btn.enabled, !btn.event.is_digit(), "{:?}", btn.event);
        }
        keypad.set_digits_enabled(true);
        assert!(keypad.buttons().all(|b| b.enabled));
    }

    #[test]
    fn test_every_event_has_a_button() {
        let keypad = Keypad::new();
        for d in 0..=9 {
            assert!(keypad.find_button(InputEvent::Digit(d)).is_some());
        }
        for event in [
            InputEvent::Clear,
            InputEvent::Plus,
            InputEvent::Minus,
            InputEvent::Enter,
        ] {
            assert!(keypad.find_button(event).is_some());
        }
    }

    // ===== Hit testing =====

    #[test]
    fn test_hit_test_first_button() {
        let keypad = Keypad::new();
        // inner area 15x10: buttons are 5 wide, 2 tall
        let area = Rect::new(0, 0, 17, 12);
        assert_eq!(keypad.hit_test(area, 1, 1), Some(0));
        assert_eq!(keypad.hit_test(area, 6, 1), Some(1));
        assert_eq!(keypad.hit_test(area, 1, 3), Some(3));
    }

    #[test]
    fn test_hit_test_bottom_row() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 17, 12);
        assert_eq!(keypad.hit_test(area, 1, 9), Some(12));
        assert_eq!(keypad.hit_test(area, 6, 9), Some(13));
        // empty cell
        assert_eq!(keypad.hit_test(area, 11, 9), None);
    }

    #[test]
    fn test_hit_test_outside() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 10, 17, 12);
        assert!(keypad.hit_test(area, 0, 0).is_none());
        assert!(keypad.hit_test(area, 100, 100).is_none());
    }

    #[test]
    fn test_hit_test_border() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 17, 12);
        assert!(keypad.hit_test(area, 0, 5).is_none());
        assert!(keypad.hit_test(area, 16, 5).is_none());
    }

    // ===== KeypadWidget tests =====

    #[test]
    fn test_keypad_widget_render() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 17, 12);
        let mut buf = Buffer::empty(area);

        KeypadWidget::new(&keypad).render(area, &mut buf);

        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Keypad"));
        assert!(content.contains("[7]"));
        assert!(content.contains("[C]"));
        assert!(content.contains("[-]"));
    }

    #[test]
    fn test_keypad_widget_render_small() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 4, 4);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);
    }

    #[test]
    fn test_keypad_widget_render_disabled_digits() {
        let mut keypad = Keypad::new();
        keypad.set_digits_enabled(false);
        let area = Rect::new(0, 0, 17, 12);
        let mut buf = Buffer::empty(area);

        KeypadWidget::new(&keypad).render(area, &mut buf);

        let cell = buf
            .content()
            .iter()
            .find(|c| c.symbol() == "1")
            .unwrap();
        assert_eq!(cell.fg, Color::DarkGray);
    }
}
