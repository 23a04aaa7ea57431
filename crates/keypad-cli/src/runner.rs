//! Command execution

use std::io::{self, Write};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use keypad_panel::core::{InputEvent, KeypadConfig, KeypadController};
use keypad_panel::tui::{keypad_area, render, InputHandler, KeypadApp};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::info;

use crate::commands::{Cli, PressArgs};
use crate::error::CliResult;

/// Builds the effective configuration: config file first, then flags
pub fn resolve_config(cli: &Cli) -> CliResult<KeypadConfig> {
    let mut config = match &cli.config {
        Some(path) => KeypadConfig::load(path)?,
        None => KeypadConfig::default(),
    };
    if let Some(max_digits) = cli.max_digits {
        config = config.with_max_digits(max_digits);
    }
    config.validate()?;
    Ok(config)
}

/// Replays a key script and writes the final display (or every step)
pub fn run_press<W: Write>(config: &KeypadConfig, args: &PressArgs, out: &mut W) -> CliResult<()> {
    let events = InputEvent::parse_script(&args.keys)?;
    let mut controller = KeypadController::from_config(config)?;
    info!(keys = %args.keys, max_digits = config.max_digits, "replaying key script");

    let mut shown = controller.display().to_string();
    for event in events {
        shown = controller.handle(event);
        if args.steps {
            writeln!(out, "{event}  {shown}")?;
        }
    }
    if !args.steps {
        writeln!(out, "{shown}")?;
    }
    Ok(())
}

/// Writes the configuration as YAML
pub fn show_config<W: Write>(config: &KeypadConfig, out: &mut W) -> CliResult<()> {
    write!(out, "{}", config.to_yaml()?)?;
    Ok(())
}

/// Runs the interactive keypad until the user quits
pub fn run_tui(config: &KeypadConfig) -> CliResult<()> {
    let mut app = KeypadApp::with_config(config)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!(max_digits = config.max_digits, "keypad started");
    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut KeypadApp,
) -> CliResult<()> {
    let input = InputHandler::new();

    while !app.should_quit() {
        let frame_area: Rect = terminal.draw(|f| render(app, f))?.area;

        match event::read()? {
            Event::Key(key) => app.apply(input.handle_key(key)),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => app.click(keypad_area(frame_area), column, row),
            _ => {}
        }
    }

    Ok(())
}
