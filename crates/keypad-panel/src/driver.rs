//! Unified keypad driver
//!
//! Behavioral checks are written once against [`KeypadDriver`] and run
//! against the bare controller and against the TUI, where events travel
//! through the real key bindings.

use crate::core::{InputEvent, KeypadController, ERROR_INDICATOR};

/// Abstract driver for keypad interactions
pub trait KeypadDriver {
    /// Forwards one event
    fn press(&mut self, event: InputEvent);

    /// Current display text
    fn display(&self) -> String;

    /// Whether digit buttons accept input
    fn digits_enabled(&self) -> bool;

    /// Forwards every event of a key script such as `"9-4="`.
    ///
    /// # Panics
    ///
    /// Panics if the script contains an unbound character.
    fn press_script(&mut self, script: &str) {
        let events = InputEvent::parse_script(script)
            .unwrap_or_else(|e| panic!("invalid key script {script:?}: {e}"));
        for event in events {
            self.press(event);
        }
    }
}

impl KeypadDriver for KeypadController {
    fn press(&mut self, event: InputEvent) {
        self.handle(event);
    }

    fn display(&self) -> String {
        KeypadController::display(self).to_string()
    }

    fn digits_enabled(&self) -> bool {
        KeypadController::digits_enabled(self)
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::KeypadDriver;
    use crate::core::InputEvent;
    use crate::tui::{InputHandler, KeypadApp};

    /// Drives a [`KeypadApp`] by synthesizing key events
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: KeypadApp,
        input: InputHandler,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: KeypadApp) -> Self {
            Self {
                app,
                input: InputHandler::new(),
            }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &KeypadApp {
            &self.app
        }
    }

    impl KeypadDriver for TuiDriver {
        fn press(&mut self, event: InputEvent) {
            let action = self.input.handle_key(InputHandler::key_for(event));
            self.app.apply(action);
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn digits_enabled(&self) -> bool {
            self.app
                .keypad()
                .buttons()
                .filter(|b| b.event.is_digit())
                .all(|b| b.enabled)
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Specifications =====
// These checks work with ANY KeypadDriver implementation

/// Verifies digit accumulation and the digit limit.
/// Expects a fresh driver limited to three digits.
pub fn verify_digit_limit<D: KeypadDriver>(driver: &mut D) {
    driver.press_script("12");
    assert_eq!(driver.display(), "12");
    assert!(driver.digits_enabled());

    driver.press_script("34");
    assert_eq!(driver.display(), "123");
    assert!(!driver.digits_enabled());

    driver.press(InputEvent::Clear);
    assert_eq!(driver.display(), "");
    assert!(driver.digits_enabled());
}

/// Verifies addition and subtraction of two operands
pub fn verify_arithmetic<D: KeypadDriver>(driver: &mut D) {
    driver.press(InputEvent::Clear);
    driver.press_script("50+12=");
    assert_eq!(driver.display(), "62.0");

    driver.press(InputEvent::Clear);
    driver.press_script("9-4=");
    assert_eq!(driver.display(), "5.0");

    driver.press(InputEvent::Clear);
    driver.press_script("3-10=");
    assert_eq!(driver.display(), "-7.0");
}

/// Verifies that operators unlock digit entry
pub fn verify_operator_unlocks<D: KeypadDriver>(driver: &mut D) {
    driver.press(InputEvent::Clear);
    driver.press_script("999");
    assert!(!driver.digits_enabled());
    driver.press(InputEvent::Minus);
    assert!(driver.digits_enabled());
    driver.press_script("1=");
    assert_eq!(driver.display(), "998.0");
}

/// Verifies that parse failures show the error indicator and recover
pub fn verify_error_recovery<D: KeypadDriver>(driver: &mut D) {
    driver.press(InputEvent::Clear);
    driver.press(InputEvent::Plus);
    assert_eq!(driver.display(), ERROR_INDICATOR);

    driver.press_script("8+");
    assert_eq!(driver.display(), "");
    driver.press(InputEvent::Enter);
    assert_eq!(driver.display(), ERROR_INDICATOR);
    driver.press_script("2=");
    assert_eq!(driver.display(), "10.0");
}

/// Complete verification suite for a driver limited to three digits
pub fn verify_all<D: KeypadDriver>(driver: &mut D) {
    verify_digit_limit(driver);
    verify_arithmetic(driver);
    verify_operator_unlocks(driver);
    verify_error_recovery(driver);
}
