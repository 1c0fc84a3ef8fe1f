//! Header, footer and popup widgets for lode.

use crate::app::{AppState, Mode, Notice};
use crate::config::Theme;
use crate::utils::shorten_home_path;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Draws the title and the current directory.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.config().theme();
    let line = Line::from(vec![
        Span::styled(" lode ", theme.title_style()),
        Span::styled(shorten_home_path(app.nav().current_dir()), theme.path_style()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draws the key hints for the current mode.
pub fn draw_hints(frame: &mut Frame, area: Rect, app: &AppState) {
    let keys = app.config().keys();
    let first = |list: &[String]| list.first().cloned().unwrap_or_default();

    let hint = match app.mode() {
        Mode::Listing => format!(
            " {} open · {} back · {} editor · {} quit",
            first(keys.activate()),
            first(keys.go_back()),
            first(keys.editor_select()),
            first(keys.quit()),
        ),
        Mode::ContentView => format!(
            " {}/{} scroll · {} close · {} quit",
            first(keys.up()),
            first(keys.down()),
            first(keys.cancel()),
            first(keys.quit()),
        ),
        Mode::IdeSelection => format!(
            " {} launch · {} cancel · {} quit",
            first(keys.activate()),
            first(keys.cancel()),
            first(keys.quit()),
        ),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hint, app.config().theme().hint_style())),
        area,
    );
}

/// Draws a notice in a centered box over `area`.
pub fn draw_notice(frame: &mut Frame, area: Rect, notice: &Notice, theme: &Theme) {
    let popup_area = popup_rect(area, 60, 5);
    frame.render_widget(Clear, popup_area);

    let (title, border_style) = if notice.is_error() {
        (" Error ", theme.error_style())
    } else {
        (" Info ", theme.title_style())
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let text = Paragraph::new(notice.text().to_string())
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(text, popup_area);
}

/// A rect `percent_x` wide and `height` rows tall, centered in `area`.
pub fn popup_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x.min(100)) / 2),
            Constraint::Percentage(percent_x.min(100)),
            Constraint::Percentage((100 - percent_x.min(100)) / 2),
        ])
        .split(vertical[1])[1]
}
