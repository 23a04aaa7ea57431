//! Keypad core: the input/state/display state machine
//!
//! Everything here is presentation-agnostic. A presentation surface forwards
//! [`InputEvent`]s to a [`KeypadController`] and renders whatever
//! [`KeypadController::display`] returns.

pub mod config;
mod controller;
mod event;

pub use config::KeypadConfig;
pub use controller::{format_result, KeypadController, Mode, PendingOperator, ERROR_INDICATOR};
pub use event::InputEvent;

use thiserror::Error;

/// Result type for keypad operations
pub type KeypadResult<T> = Result<T, KeypadError>;

/// Errors raised by the keypad core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeypadError {
    /// The display buffer could not be read as a number
    #[error("Not a number: {input:?}")]
    Parse {
        /// Buffer contents at the time of the failure
        input: String,
    },

    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// A key script contained a character with no binding
    #[error("Unknown key {key:?} at position {position}")]
    UnknownKey {
        /// The offending character
        key: char,
        /// Zero-based character position in the script
        position: usize,
    },
}

impl KeypadError {
    /// Create a parse error for the given buffer contents
    #[must_use]
    pub fn parse(input: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
