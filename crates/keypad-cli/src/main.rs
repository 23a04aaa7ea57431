//! Keypad: a two-operand adding keypad for the terminal
//!
//! ## Usage
//!
//! ```bash
//! keypad                      # Interactive keypad
//! keypad -d 7                 # Interactive keypad, seven digits
//! keypad press "50+12="       # Replay keys, print the display
//! keypad --config k.yaml config
//! ```

use clap::Parser;
use keypad_cli::{
    logging, resolve_config, run_press, run_tui, show_config, Cli, CliResult, Commands, LogTarget,
};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // The interactive keypad owns the terminal, so it never logs to stderr
    let target = match (&cli.log_file, &cli.command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Some(Commands::Press(_) | Commands::Config)) => LogTarget::Stderr,
        (None, None | Some(Commands::Run)) => LogTarget::Off,
    };
    logging::init(target, cli.log_level())?;

    let config = resolve_config(&cli)?;

    match &cli.command {
        None | Some(Commands::Run) => run_tui(&config),
        Some(Commands::Press(args)) => run_press(&config, args, &mut io::stdout().lock()),
        Some(Commands::Config) => show_config(&config, &mut io::stdout().lock()),
    }
}
