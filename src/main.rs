mod app;
mod cli;
mod core;
mod infra;
mod ui;

use crate::app::{AppCommand, AppError, AppEvent, AppModel};
use crate::cli::CliInvocation;
use crate::infra::{
    Settings, ThemeChoice, load_settings, read_appended, read_tail, resolve_state_dir,
    save_settings,
};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::size as terminal_size;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{ExecutableCommand, execute};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{self, IsTerminal, Stdout, Write};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const TAIL_BYTES: usize = 256 * 1024;

#[derive(Debug, Error)]
enum MainError {
    #[error(transparent)]
    App(#[from] AppError),
}

fn main() {
    if let Err(error) = run_main() {
        let mut err = io::stderr().lock();
        let _ = writeln!(err, "{error}");
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), MainError> {
    let args = std::env::args().collect::<Vec<_>>();
    let invocation = match crate::cli::parse_invocation(&args) {
        Ok(invocation) => invocation,
        Err(error) => {
            let mut err = io::stderr().lock();
            let _ = writeln!(err, "{error}");
            let _ = writeln!(err);
            print_help();
            std::process::exit(2);
        }
    };

    match invocation {
        CliInvocation::PrintHelp => {
            print_help();
            Ok(())
        }
        CliInvocation::PrintVersion => {
            let mut out = io::stdout().lock();
            let _ = writeln!(out, "{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        CliInvocation::Tui { log_path, theme } => Ok(run_tui(log_path, theme)?),
    }
}

fn print_help() {
    let text = format!(
        "{name} - keyboard-driven terminal dashboard\n\nUSAGE:\n  {name} [LOG_FILE] [--theme dark|light]\n  {name} --help | --version\n\nARGS:\n  LOG_FILE       Log file to tail in the Logs view\n\nFLAGS:\n  -t, --theme    Override the saved theme for this run\n\nKEYS:\n  ↑/k ↓/j        Move selection\n  PgUp/PgDn      Page\n  g/G Home/End   Jump to start/end (G re-engages follow mode)\n  /              Search the log view\n  Enter          Activate selection\n  Esc/q          Back (quit from the home screen)\n  F1/?           Help overlay\n  Ctrl+Q/Ctrl+C  Quit from anywhere\n\nENV:\n  OPSDECK_STATE_DIR  Override where settings.json is stored\n",
        name = env!("CARGO_PKG_NAME")
    );
    let mut out = io::stdout().lock();
    let _ = write!(out, "{text}");
}

fn run_tui(log_path: Option<PathBuf>, theme: Option<ThemeChoice>) -> Result<(), AppError> {
    let interactive = io::stdin().is_terminal();

    let state_dir = resolve_state_dir().ok();
    let mut load_notice: Option<String> = None;
    let mut settings = match &state_dir {
        Some(dir) => match load_settings(dir) {
            Ok(settings) => settings,
            Err(error) => {
                load_notice = Some(format!("Using default settings: {error}"));
                Settings::default()
            }
        },
        None => Settings::default(),
    };
    if let Some(theme) = theme {
        settings.theme = theme;
    }

    let mut model = AppModel::new(log_path, settings, interactive)?.with_notice(load_notice);

    let mut terminal = setup_terminal()?;
    if let Ok((cols, rows)) = terminal_size() {
        model = model.with_terminal_size(cols, rows);
    }
    let result = run(&mut terminal, model, state_dir);
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, AppError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<(), AppError> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut model: AppModel,
    state_dir: Option<PathBuf>,
) -> Result<(), AppError> {
    let mut log_offset: Option<u64> = None;
    let mut log_error: Option<String> = None;

    if let Some(path) = model.logs.source.clone() {
        match read_tail(&path, TAIL_BYTES) {
            Ok(tail) => {
                log_offset = Some(tail.offset);
                let (next, _) = app::update(model, AppEvent::LogLines(tail.lines));
                model = next;
            }
            Err(error) => {
                let message = format!("Cannot read {}: {error}", path.display());
                log_error = Some(message.clone());
                let (next, _) = app::update(model, AppEvent::LogError(message));
                model = next;
            }
        }
    }

    loop {
        terminal.draw(|frame| ui::render(frame, &model))?;

        if let Some(path) = model.logs.source.clone() {
            let (next, new_offset, new_error) =
                poll_log(model, &path, log_offset, log_error.take());
            model = next;
            log_offset = new_offset;
            log_error = new_error;
        }

        if !event::poll(Duration::from_millis(200))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                let (next, command) = app::update(model, AppEvent::Key(key));
                model = next;
                match command {
                    AppCommand::None => {}
                    AppCommand::Quit => return Ok(()),
                    AppCommand::SaveSettings => {
                        if let Some(dir) = &state_dir {
                            if let Err(error) = save_settings(dir, &model.settings) {
                                model.notice = Some(format!("Failed to save settings: {error}"));
                            }
                        }
                    }
                    AppCommand::Fatal(error) => return Err(error.into()),
                }
            }
            Event::Resize(cols, rows) => {
                let (next, _) = app::update(model, AppEvent::Resize(cols, rows));
                model = next;
            }
            _ => {}
        }
    }
}

/// Pick up lines appended to the log since the last pass. Read failures are
/// surfaced once per distinct error, not on every tick.
fn poll_log(
    model: AppModel,
    path: &std::path::Path,
    offset: Option<u64>,
    last_error: Option<String>,
) -> (AppModel, Option<u64>, Option<String>) {
    let Some(offset) = offset else {
        // The initial tail failed (file missing at startup); retry it.
        return match read_tail(path, TAIL_BYTES) {
            Ok(tail) => {
                let (next, _) = app::update(model, AppEvent::LogLines(tail.lines));
                (next, Some(tail.offset), None)
            }
            Err(error) => {
                let message = format!("Cannot read {}: {error}", path.display());
                if last_error.as_deref() == Some(message.as_str()) {
                    (model, None, Some(message))
                } else {
                    let (next, _) = app::update(model, AppEvent::LogError(message.clone()));
                    (next, None, Some(message))
                }
            }
        };
    };

    match read_appended(path, offset) {
        Ok(update) if update.lines.is_empty() => (model, Some(update.offset), None),
        Ok(update) => {
            let offset = update.offset;
            let (next, _) = app::update(model, AppEvent::LogLines(update.lines));
            (next, Some(offset), None)
        }
        Err(error) => {
            let message = format!("Cannot read {}: {error}", path.display());
            if last_error.as_deref() == Some(message.as_str()) {
                (model, Some(offset), Some(message))
            } else {
                let (next, _) = app::update(model, AppEvent::LogError(message.clone()));
                (next, Some(offset), Some(message))
            }
        }
    }
}
