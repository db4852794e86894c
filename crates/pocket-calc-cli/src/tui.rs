//! Terminal event loop

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pocket_calc::core::CalculatorConfig;
use pocket_calc::tui::{keypad_area, render, CalculatorApp};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use crate::error::CliResult;

/// Longest the loop blocks when no highlight is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Raw mode and alternate screen, undone on drop
#[derive(Debug)]
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> CliResult<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "failed to disable raw mode");
        }
        if let Err(e) = restore_screen(&mut io::stdout()) {
            warn!(error = %e, "failed to restore screen");
        }
    }
}

/// Leaves the alternate screen, stops mouse capture and shows the cursor
fn restore_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)
}

/// Runs the interactive calculator until the user quits
pub fn run_tui(config: CalculatorConfig) -> CliResult<()> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    info!("terminal ui started");
    let result = run_app(&mut terminal, CalculatorApp::with_config(config));
    info!("terminal ui stopped");

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: CalculatorApp) -> CliResult<()> {
    loop {
        let area = terminal.draw(|f| render(&app, f))?.area;

        let timeout = app.poll_timeout(Instant::now(), IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    app.handle_key(key, Instant::now());
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse, keypad_area(area), Instant::now());
                }
                _ => {}
            }
        }
        app.tick(Instant::now());

        if app.should_quit() {
            return Ok(());
        }
    }
}
