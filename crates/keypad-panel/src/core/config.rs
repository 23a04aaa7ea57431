//! Keypad configuration

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{KeypadError, KeypadResult};

/// Construction-time keypad settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeypadConfig {
    /// Maximum number of characters digit entry may produce
    pub max_digits: usize,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            max_digits: Self::DEFAULT_MAX_DIGITS,
        }
    }
}

impl KeypadConfig {
    /// Digit limit used when none is configured
    pub const DEFAULT_MAX_DIGITS: usize = 10;

    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the digit limit
    #[must_use]
    pub const fn with_max_digits(mut self, max_digits: usize) -> Self {
        self.max_digits = max_digits;
        self
    }

    /// Checks the settings are usable
    pub fn validate(&self) -> KeypadResult<()> {
        if self.max_digits == 0 {
            return Err(KeypadError::config("max_digits must be at least 1"));
        }
        Ok(())
    }

    /// Parses and validates a YAML document
    pub fn from_yaml_str(yaml: &str) -> KeypadResult<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)
            .map_err(|e| KeypadError::config(format!("invalid YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a YAML config file
    pub fn load(path: &Path) -> KeypadResult<Self> {
        let yaml = fs::read_to_string(path)
            .map_err(|e| KeypadError::config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml_str(&yaml)
    }

    /// Serializes the settings as YAML
    pub fn to_yaml(&self) -> KeypadResult<String> {
        serde_yaml_ng::to_string(self)
            .map_err(|e| KeypadError::config(format!("cannot serialize: {e}")))
    }
}
