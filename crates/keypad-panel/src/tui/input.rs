//! Keyboard bindings
//!
//! Digits on the main row and the numeric keypad arrive as the same
//! character, so one binding covers both.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::InputEvent;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an event to the keypad
    Press(InputEvent),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                // Ctrl+Shift+= arrives as either '=' or '+' depending on the terminal
                KeyCode::Char('=' | '+') if modifiers.contains(KeyModifiers::SHIFT) => {
                    KeyAction::Press(InputEvent::Plus)
                }
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                InputEvent::from_char(c).map_or(KeyAction::None, KeyAction::Press)
            }
            KeyCode::Char('+') => KeyAction::Press(InputEvent::Plus),
            KeyCode::Char('-') => KeyAction::Press(InputEvent::Minus),
            KeyCode::Char('=') | KeyCode::Enter => KeyAction::Press(InputEvent::Enter),
            KeyCode::Char('c' | 'C') | KeyCode::Esc | KeyCode::Delete => {
                KeyAction::Press(InputEvent::Clear)
            }
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    /// A key event that triggers `event`, used to replay events through
    /// the bindings
    #[must_use]
    pub fn key_for(event: InputEvent) -> KeyEvent {
        let code = match event {
            InputEvent::Enter => KeyCode::Enter,
            InputEvent::Clear => KeyCode::Esc,
            other => KeyCode::Char(other.label()),
        };
        KeyEvent::new(code, KeyModifiers::NONE)
    }
}
