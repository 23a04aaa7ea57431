//! Input events forwarded by a presentation surface

use std::fmt;

use super::{KeypadError, KeypadResult};

/// A discrete keypad action, whether it came from a click or a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Append a digit (0-9)
    Digit(u8),
    /// Reset the buffer and the stored operand
    Clear,
    /// Store the buffer as left operand of an addition
    Plus,
    /// Store the buffer as left operand of a subtraction
    Minus,
    /// Evaluate the pending operation
    Enter,
}

impl InputEvent {
    /// Creates a digit event, rejecting values above 9
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Maps a script character to an event.
    ///
    /// `0`-`9` are digits, `c`/`C` clears, `+` and `-` select the operator,
    /// `=` evaluates.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => ch.to_digit(10).and_then(|d| Self::digit(d as u8)),
            'c' | 'C' => Some(Self::Clear),
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '=' => Some(Self::Enter),
            _ => None,
        }
    }

    /// Parses a key script such as `"50+12="` into events.
    /// Whitespace is ignored.
    pub fn parse_script(script: &str) -> KeypadResult<Vec<Self>> {
        script
            .chars()
            .enumerate()
            .filter(|(_, ch)| !ch.is_whitespace())
            .map(|(position, key)| {
                Self::from_char(key).ok_or(KeypadError::UnknownKey { key, position })
            })
            .collect()
    }

    /// The label printed on the matching keypad button
    #[must_use]
    pub fn label(self) -> char {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10).unwrap_or('?'),
            Self::Clear => 'C',
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Enter => '=',
        }
    }

    /// Returns true for digit events
    #[must_use]
    pub const fn is_digit(self) -> bool {
        matches!(self, Self::Digit(_))
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_constructor() {
        for d in 0..=9 {
            assert_eq!(InputEvent::digit(d), Some(InputEvent::Digit(d)));
        }
        assert_eq!(InputEvent::digit(10), None);
        assert_eq!(InputEvent::digit(u8::MAX), None);
    }

    #[test]
    fn test_from_char_digits() {
        for (d, ch) in ('0'..='9').enumerate() {
            assert_eq!(InputEvent::from_char(ch), Some(InputEvent::Digit(d as u8)));
        }
    }

    #[test]
    fn test_from_char_actions() {
        assert_eq!(InputEvent::from_char('c'), Some(InputEvent::Clear));
        assert_eq!(InputEvent::from_char('C'), Some(InputEvent::Clear));
        assert_eq!(InputEvent::from_char('+'), Some(InputEvent::Plus));
        assert_eq!(InputEvent::from_char('-'), Some(InputEvent::Minus));
        assert_eq!(InputEvent::from_char('='), Some(InputEvent::Enter));
        assert_eq!(InputEvent::from_char('*'), None);
        assert_eq!(InputEvent::from_char('.'), None);
    }

    #[test]
    fn test_parse_script() {
        let events = InputEvent::parse_script("50+12=").unwrap();
        assert_eq!(
            events,
            vec![
                InputEvent::Digit(5),
                InputEvent::Digit(0),
                InputEvent::Plus,
                InputEvent::Digit(1),
                InputEvent::Digit(2),
                InputEvent::Enter,
            ]
        );
    }

    #[test]
    fn test_parse_script_skips_whitespace() {
        let events = InputEvent::parse_script(" 9 - 4 = ").unwrap();
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn test_parse_script_unknown_key() {
        let err = InputEvent::parse_script("1*2").unwrap_err();
        assert_eq!(
            err,
            KeypadError::UnknownKey {
                key: '*',
                position: 1
            }
        );
    }

    #[test]
    fn test_parse_script_empty() {
        assert!(InputEvent::parse_script("").unwrap().is_empty());
    }

    #[test]
    fn test_label_matches_from_char() {
        for event in [
            InputEvent::Digit(7),
            InputEvent::Clear,
            InputEvent::Plus,
            InputEvent::Minus,
            InputEvent::Enter,
        ] {
            assert_eq!(InputEvent::from_char(event.label()), Some(event));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(InputEvent::Digit(3).to_string(), "3");
        assert_eq!(InputEvent::Enter.to_string(), "=");
    }

    #[test]
    fn test_is_digit() {
        assert!(InputEvent::Digit(0).is_digit());
        assert!(!InputEvent::Plus.is_digit());
    }
}
