//! Interactive terminal frontend
//!
//! One search box, one suggestion list, one profile dropdown. All widget
//! state lives in [`app::App`]; rendering and mouse hit areas are rebuilt
//! every frame.

pub mod app;
pub mod colors;
pub mod menu;
pub mod results;
pub mod search;
pub mod ui;

use crate::ClientConfig;
use app::App;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;

/// Restores the terminal even when the session ends with an error
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

/// Run the interactive client until the user quits
pub fn run(config: ClientConfig) -> crate::Result<()> {
    let mut app = App::new(config)?;

    enable_raw_mode()?;
    let _guard = TerminalGuard;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    app.run(&mut terminal)
}
