//! TUI application state
//!
//! Routes keyboard and mouse input to a single owned controller and keeps
//! the keypad's button states in sync with it.

use ratatui::layout::Rect;
use tracing::trace;

use super::input::KeyAction;
use super::keypad::Keypad;
use crate::core::{InputEvent, KeypadConfig, KeypadController, KeypadResult, Mode};

/// Keypad application state
#[derive(Debug)]
pub struct KeypadApp {
    controller: KeypadController,
    keypad: Keypad,
    should_quit: bool,
}

impl Default for KeypadApp {
    fn default() -> Self {
        Self::with_controller(KeypadController::new())
    }
}

impl KeypadApp {
    /// Creates an app with the default ten-digit limit
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an app from configuration
    pub fn with_config(config: &KeypadConfig) -> KeypadResult<Self> {
        KeypadController::from_config(config).map(Self::with_controller)
    }

    /// Wraps an existing controller
    #[must_use]
    pub fn with_controller(controller: KeypadController) -> Self {
        let mut app = Self {
            controller,
            keypad: Keypad::new(),
            should_quit: false,
        };
        app.sync_keypad();
        app
    }

    /// Returns the controller
    #[must_use]
    pub fn controller(&self) -> &KeypadController {
        &self.controller
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Text currently shown on the display
    #[must_use]
    pub fn display(&self) -> &str {
        self.controller.display()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies a mapped key action
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(event) => self.press(event),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Activates the button forwarding `event`.
    ///
    /// Disabled digit buttons ignore activation, whether it came from a key
    /// or a click.
    pub fn press(&mut self, event: InputEvent) {
        if event.is_digit() && !self.controller.digits_enabled() {
            trace!(%event, "digit button disabled");
            return;
        }
        self.keypad.highlight(event);
        self.controller.handle(event);
        self.sync_keypad();
    }

    /// Activates the button under a click, if any
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) {
        let event = self
            .keypad
            .hit_test(keypad_area, x, y)
            .and_then(|idx| self.keypad.get_button(idx))
            .map(|btn| btn.event);
        if let Some(event) = event {
            self.press(event);
        }
    }

    fn sync_keypad(&mut self) {
        self.keypad
            .set_digits_enabled(self.controller.digits_enabled());
    }

    /// Short status line: mode and pending operator
    #[must_use]
    pub fn status(&self) -> String {
        let mode = match self.controller.mode() {
            Mode::Entering => "Entering",
            Mode::Locked => "Locked",
            Mode::Result => "Result",
        };
        match self.controller.pending_operator().symbol() {
            Some(op) => format!(
                "{mode}  {} {op}",
                crate::core::format_result(self.controller.stored_operand())
            ),
            None => mode.to_string(),
        }
    }
}
