//! Keypad Panel - a two-operand adding keypad
//!
//! A numeric keypad that accepts digits up to a configurable limit, adds or
//! subtracts two operands, and shows a running result. The state machine in
//! [`core`] is presentation-agnostic; the `tui` feature provides a terminal
//! surface with clickable buttons and key bindings.
//!
//! # Example
//!
//! ```rust
//! use keypad_panel::prelude::*;
//!
//! let mut keypad = KeypadController::with_max_digits(7).unwrap();
//! for event in InputEvent::parse_script("50+12=").unwrap() {
//!     keypad.handle(event);
//! }
//! assert_eq!(keypad.display(), "62.0");
//!
//! // Parse failures show an indicator instead of failing
//! keypad.handle(InputEvent::Clear);
//! assert_eq!(keypad.handle(InputEvent::Plus), "Err");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        InputEvent, KeypadConfig, KeypadController, KeypadError, KeypadResult, Mode,
        PendingOperator, ERROR_INDICATOR,
    };
    pub use crate::driver::KeypadDriver;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
    #[cfg(feature = "tui")]
    pub use crate::tui::{InputHandler, KeyAction, KeypadApp};
}
