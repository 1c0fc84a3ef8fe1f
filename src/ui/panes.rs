//! Pane drawing for lode: the list of entries or editors, and the content view.

use crate::app::{AppState, ListRow, Mode};
use crate::config::Theme;
use crate::utils::truncate_to_width;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

fn pane_block<'a>(title: String, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.description_style())
        .title(Span::styled(title, theme.title_style()))
}

/// Draws the directory listing, or the editor list in [Mode::IdeSelection].
pub fn draw_list(frame: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.config().theme();
    let title = match app.mode() {
        Mode::IdeSelection => " Open with ".to_string(),
        _ => format!(" {} entries ", app.nav().entries().len()),
    };
    let block = pane_block(title, theme);

    let rows = app.rows();
    if rows.is_empty() {
        let line = Line::from(Span::styled(" [Empty]", theme.item_style()));
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let selected = app.selected_row();
    let icon = theme.selection_icon();
    // border + highlight symbol + one space of padding
    let width = usize::from(area.width).saturating_sub(3 + icon.chars().count());

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| make_row(row, idx == selected, width, theme))
        .collect();

    let mut state = ListState::default();
    state.select(Some(selected));

    frame.render_stateful_widget(
        List::new(items)
            .block(block)
            .highlight_style(Style::default())
            .highlight_symbol(icon),
        area,
        &mut state,
    );
}

fn make_row<'a>(row: &ListRow, is_selected: bool, width: usize, theme: &Theme) -> ListItem<'a> {
    let title_style = if is_selected {
        theme.selection_style()
    } else {
        theme.item_style()
    };
    let title = truncate_to_width(&row.title(), width);
    let description = truncate_to_width(&row.description(), width.saturating_sub(2));

    ListItem::new(Text::from(vec![
        Line::from(Span::styled(format!(" {title}"), title_style)),
        Line::from(Span::styled(
            format!("   {description}"),
            theme.description_style(),
        )),
    ]))
}

/// Draws the wrapped file content from the current scroll offset.
pub fn draw_content(frame: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.config().theme();
    let title = app
        .nav()
        .selected_path()
        .and_then(|p| p.file_name())
        .map(|n| format!(" {} ", n.to_string_lossy()))
        .unwrap_or_default();

    let height = usize::from(area.height.saturating_sub(2));
    let text = Text::from(app.content().visible(height).to_vec());

    frame.render_widget(Paragraph::new(text).block(pane_block(title, theme)), area);
}
