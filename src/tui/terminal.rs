//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::info;

use crate::api::HttpImportClient;
use crate::config::{CscxPaths, Settings};
use crate::error::CscxError;
use crate::models::Schema;
use crate::wizard::ImportWizard;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    // Bracketed paste delivers a pasted or dropped path as one event
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
///
/// File reads and import requests are spawned on `runtime`; their results
/// come back through the event channel. With `initial_file`, the wizard
/// starts reading it right away.
pub fn run_tui(
    runtime: Handle,
    settings: &Settings,
    paths: &CscxPaths,
    initial_file: Option<PathBuf>,
) -> Result<()> {
    let api = Arc::new(HttpImportClient::from_settings(settings)?);
    let events = EventHandler::default();
    let wizard = ImportWizard::new(Schema::customers(), settings.workspace_id.clone());

    let mut terminal = init_terminal()?;
    let mut app = App::new(settings, paths, wizard, runtime, events.sender(), api);
    info!(workspace = %settings.workspace_id, "Started terminal UI");

    if let Some(path) = initial_file {
        app.path_input.set_pasted(&path.to_string_lossy());
        app.start_file_read(path);
    }

    let outcome = event_loop(&mut terminal, &mut app, &events);

    restore_terminal()?;
    outcome
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        let event = events
            .next()
            .map_err(|_| CscxError::Tui("Input thread stopped".into()))?;
        handle_event(app, event)?;

        if app.should_quit {
            return Ok(());
        }
    }
}
