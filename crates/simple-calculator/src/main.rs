//! Simple Calculator terminal application
//!
//! Usage: simple-calculator [--config PATH] [--log-file PATH] [-v]

use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    cursor::Show,
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use simple_calculator::tui::{hit_test, render, CalculatorApp, InputHandler};
use simple_calculator::{logging, AppError, AppResult, Cli};
use tracing::{debug, info, warn};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> AppResult<()> {
    let config = cli.resolve_config()?;

    if cli.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    if logging::init(&config.log, cli.verbose)? {
        info!(version = env!("CARGO_PKG_VERSION"), "simple-calculator starting");
    }

    let mut app = CalculatorApp::with_display(config.display);

    enable_raw_mode()?;
    let result = enter_and_run(&mut app);
    let result = merge_restore(result, restore_terminal());

    info!(result = %app.result(), "simple-calculator stopped");
    result
}

fn enter_and_run(app: &mut CalculatorApp) -> AppResult<()> {
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    run_app(&mut terminal, app)
}

/// Leaves raw mode and the alternate screen, attempting every step
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste,
        Show
    );
    raw.and(screen)
}

/// Combines the session outcome with the restore outcome; the session error wins
fn merge_restore(result: AppResult<()>, restored: io::Result<()>) -> AppResult<()> {
    match (result, restored) {
        (Err(e), Err(restore_err)) => {
            warn!(error = %restore_err, "terminal restore failed");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => restored.map_err(AppError::from),
    }
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut CalculatorApp) -> AppResult<()> {
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|f| render(app, f))?;

        match event::read()? {
            Event::Key(key) => {
                if app.apply_action(input_handler.handle_key(key)) {
                    break;
                }
            }
            Event::Paste(text) => app.paste(&text),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                if let Some(target) = hit_test(app, area, mouse.column, mouse.row) {
                    debug!(?target, "click");
                    app.click(target);
                }
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
