//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Keypad: a two-operand adding keypad for the terminal
#[derive(Parser, Debug)]
#[command(name = "keypad")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Maximum number of digits (overrides the config file)
    #[arg(short = 'd', long, global = true)]
    pub max_digits: Option<usize>,

    /// YAML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to the interactive keypad)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive keypad
    Run,

    /// Replay a key script and print the display
    ///
    /// Keys: 0-9 digits, + plus, - minus, = enter, c clear.
    Press(PressArgs),

    /// Print the effective configuration as YAML
    Config,
}

/// Arguments for the press command
#[derive(Args, Debug)]
pub struct PressArgs {
    /// Key script, e.g. "50+12="
    #[arg(allow_hyphen_values = true)]
    pub keys: String,

    /// Print the display after every key
    #[arg(long)]
    pub steps: bool,
}

impl Cli {
    /// Log level implied by the verbosity flag
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
