//! Terminal rendering and event loop for lode.
//!
//! Handles setup/teardown of raw mode, alternate screen, redraws,
//! and events (keypress, resize) to app logic.

use crate::app::{AppState, InputEvent, KeypressResult};
use crate::error::Result;
use crate::ui;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        self as term, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use std::{io, time::Duration};

/// Initializes the terminal in raw mode and alternate screen and runs the main event loop.
///
/// Blocks until quit or until an editor was launched. The terminal is restored on
/// every exit path, including errors from the loop.
///
/// # Errors
/// [BrowseError::Terminal](crate::error::BrowseError::Terminal) if setup, drawing or
/// teardown fails, and any fatal error from a transition.
pub fn run_terminal(app: &mut AppState) -> Result<KeypressResult> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    result
}

/// Main event loop of lode: draws UI, polls for events and dispatches them to the app.
/// Returns on quit or launch
fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> Result<KeypressResult>
where
    io::Error: From<<B as Backend>::Error>,
{
    let (w, h) = term::size()?;
    app.handle_event(InputEvent::Resize(w, h))?;
    terminal.draw(|f| ui::render(f, app)).map_err(io::Error::from)?;

    loop {
        if app.tick() {
            terminal.draw(|f| ui::render(f, app)).map_err(io::Error::from)?;
        }

        // Event Polling
        if !event::poll(Duration::from_millis(16))? {
            continue;
        }
        let result = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_keypress(key)?,
            Event::Resize(w, h) => app.handle_event(InputEvent::Resize(w, h))?,
            _ => continue,
        };

        match result {
            KeypressResult::Continue => {}
            done @ (KeypressResult::Quit | KeypressResult::Launched) => return Ok(done),
        }

        // Redraw after state change
        terminal.draw(|f| ui::render(f, app)).map_err(io::Error::from)?;
    }
}
