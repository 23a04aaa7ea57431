//! Keypad state machine
//!
//! Digits accumulate into a bounded display buffer. Plus and Minus capture
//! the buffer as the left operand and clear it; Enter combines the stored
//! operand with the buffer and shows the result.
//!
//! ```text
//!            digit (buffer full)
//!  Entering ─────────────────────▶ Locked
//!     ▲  ▲        Plus / Minus       │
//!     │  └───────────────────────────┘
//!     │ Clear          Enter
//!     └────────── Result ◀────── Entering / Locked
//! ```

use tracing::{debug, trace, warn};

use super::config::KeypadConfig;
use super::{InputEvent, KeypadError, KeypadResult};

/// Text shown while a rejected input is being reported
pub const ERROR_INDICATOR: &str = "Err";

/// Operation awaiting its right-hand operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingOperator {
    /// No operator selected yet
    #[default]
    None,
    /// Addition
    Add,
    /// Subtraction
    Subtract,
}

impl PendingOperator {
    /// Applies the operator, or returns `None` when nothing is pending
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> Option<f64> {
        match self {
            Self::None => None,
            Self::Add => Some(left + right),
            Self::Subtract => Some(left - right),
        }
    }

    /// Operator symbol, if any
    #[must_use]
    pub const fn symbol(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Add => Some('+'),
            Self::Subtract => Some('-'),
        }
    }
}

/// Logical state of the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Digits accumulate into the buffer
    Entering,
    /// Buffer is full; digits are rejected
    Locked,
    /// Buffer holds a computed value
    Result,
}

/// Owns the display buffer, stored operand, pending operator and digit lock
#[derive(Debug, Clone)]
pub struct KeypadController {
    buffer: String,
    stored: f64,
    pending: PendingOperator,
    digit_locked: bool,
    showing_result: bool,
    error: Option<KeypadError>,
    max_digits: usize,
}

impl Default for KeypadController {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypadController {
    /// Creates a controller accepting up to ten digits
    #[must_use]
    pub fn new() -> Self {
        Self::unchecked(KeypadConfig::DEFAULT_MAX_DIGITS)
    }

    /// Creates a controller accepting up to `max_digits` digits
    pub fn with_max_digits(max_digits: usize) -> KeypadResult<Self> {
        Self::from_config(&KeypadConfig::new().with_max_digits(max_digits))
    }

    /// Creates a controller from validated configuration
    pub fn from_config(config: &KeypadConfig) -> KeypadResult<Self> {
        config.validate()?;
        Ok(Self::unchecked(config.max_digits))
    }

    fn unchecked(max_digits: usize) -> Self {
        Self {
            buffer: String::new(),
            stored: 0.0,
            pending: PendingOperator::None,
            digit_locked: false,
            showing_result: false,
            error: None,
            max_digits,
        }
    }

    /// Dispatches an event and returns the text to display.
    ///
    /// Parse failures do not escape: the display switches to
    /// [`ERROR_INDICATOR`] and the rest of the state is left as it was.
    pub fn handle(&mut self, event: InputEvent) -> String {
        self.error = None;
        let outcome = match event {
            InputEvent::Digit(d) => {
                self.on_digit(d);
                Ok(())
            }
            InputEvent::Clear => {
                self.on_clear();
                Ok(())
            }
            InputEvent::Plus => self.on_plus(),
            InputEvent::Minus => self.on_minus(),
            InputEvent::Enter => self.on_enter().map(drop),
        };
        if let Err(err) = outcome {
            warn!(%err, %event, "input rejected");
            self.error = Some(err);
        }
        self.display().to_string()
    }

    /// Appends a digit unless the buffer is already full
    pub fn on_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            trace!(digit, "not a decimal digit");
            return;
        };
        if self.buffer.len() >= self.max_digits {
            trace!(digit, max_digits = self.max_digits, "digit dropped, buffer full");
            return;
        }
        self.buffer.push(ch);
        if self.buffer.len() == self.max_digits {
            self.digit_locked = true;
        }
        debug!(buffer = %self.buffer, locked = self.digit_locked, "digit appended");
    }

    /// Empties the buffer and zeroes the stored operand.
    ///
    /// The pending operator survives a clear.
    pub fn on_clear(&mut self) {
        self.buffer.clear();
        self.stored = 0.0;
        self.digit_locked = false;
        self.showing_result = false;
        debug!(pending = ?self.pending, "cleared");
    }

    /// Stores the buffer as the left operand of an addition
    pub fn on_plus(&mut self) -> KeypadResult<()> {
        self.begin_operation(PendingOperator::Add)
    }

    /// Stores the buffer as the left operand of a subtraction
    pub fn on_minus(&mut self) -> KeypadResult<()> {
        self.begin_operation(PendingOperator::Subtract)
    }

    fn begin_operation(&mut self, operator: PendingOperator) -> KeypadResult<()> {
        self.stored = self.parse_buffer()?;
        self.buffer.clear();
        self.pending = operator;
        self.digit_locked = false;
        self.showing_result = false;
        debug!(stored = self.stored, ?operator, "operator selected");
        Ok(())
    }

    /// Evaluates the pending operation and shows the result.
    ///
    /// With no operator pending the display becomes empty. The stored
    /// operand is zeroed afterwards; the operator is kept, so a second Enter
    /// computes `0 ± buffer`.
    pub fn on_enter(&mut self) -> KeypadResult<String> {
        let result = match self.pending {
            PendingOperator::None => String::new(),
            operator => {
                let right = self.parse_buffer()?;
                operator
                    .apply(self.stored, right)
                    .map(format_result)
                    .unwrap_or_default()
            }
        };
        self.stored = 0.0;
        self.buffer = result;
        self.digit_locked = self.buffer.len() >= self.max_digits;
        self.showing_result = true;
        debug!(result = %self.buffer, "evaluated");
        Ok(self.buffer.clone())
    }

    fn parse_buffer(&self) -> KeypadResult<f64> {
        self.buffer
            .parse::<f64>()
            .map_err(|_| KeypadError::parse(self.buffer.as_str()))
    }

    /// Text the presentation surface should show
    #[must_use]
    pub fn display(&self) -> &str {
        if self.error.is_some() {
            ERROR_INDICATOR
        } else {
            &self.buffer
        }
    }

    /// Raw buffer contents, ignoring any error indicator
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Left operand captured by the last Plus/Minus
    #[must_use]
    pub fn stored_operand(&self) -> f64 {
        self.stored
    }

    /// Operator awaiting its right-hand operand
    #[must_use]
    pub fn pending_operator(&self) -> PendingOperator {
        self.pending
    }

    /// True once the buffer reached the digit limit
    #[must_use]
    pub fn is_digit_locked(&self) -> bool {
        self.digit_locked
    }

    /// Whether digit buttons should accept input
    #[must_use]
    pub fn digits_enabled(&self) -> bool {
        !self.digit_locked
    }

    /// Maximum buffer length reachable through digit entry
    #[must_use]
    pub fn max_digits(&self) -> usize {
        self.max_digits
    }

    /// Error from the last event, if it was rejected
    #[must_use]
    pub fn last_error(&self) -> Option<&KeypadError> {
        self.error.as_ref()
    }

    /// Current logical state
    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.digit_locked {
            Mode::Locked
        } else if self.showing_result {
            Mode::Result
        } else {
            Mode::Entering
        }
    }
}

/// Formats a result the way floating-point values are conventionally
/// printed: whole numbers keep a trailing `.0`.
#[must_use]
pub fn format_result(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
