//! Keypad CLI library
//!
//! Command-line front end for the keypad: the interactive terminal keypad,
//! headless key-script replay, and configuration display.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod error;
pub mod logging;
mod runner;

pub use commands::{Cli, Commands, PressArgs};
pub use error::{CliError, CliResult};
pub use logging::LogTarget;
pub use runner::{resolve_config, run_press, run_tui, show_config};
