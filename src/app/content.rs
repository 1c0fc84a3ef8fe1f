//! Rendered file content and its scroll position.
//!
//! The renderer's ANSI output is parsed once into styled lines, then wrapped to
//! the content width. Scrolling counts wrapped rows, so every part of a long
//! line can be brought into view, and a resize re-wraps.

use ansi_to_tui::IntoText;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

const TAB: &str = "    ";

/// The rendered text shown in content view.
#[derive(Debug, Default)]
pub struct ContentState {
    rendered: String,
    lines: Vec<Line<'static>>,
    wrapped: Vec<Line<'static>>,
    width: usize,
    scroll: usize,
}

impl ContentState {
    /// Replaces the content and wraps it to `width` columns.
    pub fn set(&mut self, rendered: String, width: usize) {
        let expanded = rendered.replace('\t', TAB);
        let body = expanded.strip_suffix('\n').unwrap_or(&expanded);
        self.lines = match body.into_text() {
            Ok(text) => text.lines,
            Err(e) => {
                tracing::debug!(error = %e, "ansi parse failed, showing raw text");
                body.lines().map(|l| Line::from(l.to_string())).collect()
            }
        };
        self.rendered = rendered;
        self.scroll = 0;
        self.wrap_to(width);
    }

    /// Re-wraps for a new width. The scroll offset is kept; call [clamp](Self::clamp)
    /// afterwards.
    pub fn rewrap(&mut self, width: usize) {
        if width.max(1) != self.width {
            self.wrap_to(width);
        }
    }

    fn wrap_to(&mut self, width: usize) {
        self.width = width.max(1);
        self.wrapped = self
            .lines
            .iter()
            .flat_map(|line| wrap_line(line, self.width))
            .collect();
    }

    #[inline]
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    #[inline]
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Number of rows after wrapping.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.wrapped.len()
    }

    /// Wrapped rows starting at the scroll offset, at most `height` of them.
    pub fn visible(&self, height: usize) -> &[Line<'static>] {
        let start = self.scroll.min(self.wrapped.len());
        let end = start.saturating_add(height).min(self.wrapped.len());
        &self.wrapped[start..end]
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Scrolls down one row, stopping when the last page is in view.
    pub fn scroll_down(&mut self, viewport_height: usize) {
        if self.scroll < self.max_scroll(viewport_height) {
            self.scroll += 1;
        }
    }

    /// Keeps the offset valid after the viewport changed size.
    pub fn clamp(&mut self, viewport_height: usize) {
        self.scroll = self.scroll.min(self.max_scroll(viewport_height));
    }

    fn max_scroll(&self, viewport_height: usize) -> usize {
        self.wrapped.len().saturating_sub(viewport_height.max(1))
    }
}

/// Splits `line` into rows of at most `width` columns, keeping span styles.
fn wrap_line(line: &Line<'static>, width: usize) -> Vec<Line<'static>> {
    let mut rows = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for span in &line.spans {
        let mut chunk = String::new();
        for c in span.content.chars() {
            let w = c.width().unwrap_or(0);
            if used > 0 && used + w > width {
                if !chunk.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut chunk), span.style));
                }
                rows.push(Line::from(std::mem::take(&mut spans)).style(line.style));
                used = 0;
            }
            chunk.push(c);
            used += w;
        }
        if !chunk.is_empty() {
            spans.push(Span::styled(chunk, span.style));
        }
    }

    rows.push(Line::from(spans).style(line.style));
    rows
}
