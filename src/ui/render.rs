//! UI renderer implementation.
//!
//! Contains the top-level `render` entry point used by the terminal loop and the
//! layout helper that splits the screen into header, body and footer.
//!
//! This module stays pure rendering: it reads state and config and produces
//! widgets without changing the app.

use crate::app::{AppState, Mode};
use crate::ui::{panes, widgets};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

/// Renders the whole terminal UI for one frame.
pub fn render(frame: &mut Frame, app: &AppState) {
    let [header, body, footer] = layout_chunks(frame.area());

    widgets::draw_header(frame, header, app);
    match app.mode() {
        Mode::Listing | Mode::IdeSelection => panes::draw_list(frame, body, app),
        Mode::ContentView => panes::draw_content(frame, body, app),
    }
    widgets::draw_hints(frame, footer, app);

    if let Some(notice) = app.notice() {
        widgets::draw_notice(frame, body, notice, app.config().theme());
    }
}

/// Splits the screen into a one-row header, the body and a one-row footer.
pub fn layout_chunks(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}
