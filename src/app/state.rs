//! Application state and main controller module for lode.
//!
//! [AppState] owns everything the browser needs while running:
//! - The configuration and the keymap built from it
//! - Navigation state: directory, listing, selection, history, selected path
//! - The rendered content of the viewed file and its scroll offset
//! - The editor list selection
//! - The content renderer and editor launcher behind their traits
//! - A timed notice for surfaced errors
//!
//! Transitions live in [handlers](super::handlers); this module holds the data and
//! the dispatch from key presses to [InputEvent](crate::app::InputEvent)s.

use crate::app::editors::{EDITORS, IdeDescriptor, ListRow};
use crate::app::keymap::Keymap;
use crate::app::{ContentState, NavState};
use crate::config::Config;
use crate::core::{ContentRenderer, EditorLauncher, list_dir};
use crate::error::Result;

use crossterm::event::KeyEvent;
use std::time::{Duration, Instant};

/// How long a notice stays on screen.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(3);

/// Rows taken by the header, the list border and the hint footer.
pub const CHROME_ROWS: u16 = 4;

/// Result of one processed input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypressResult {
    Continue,
    Quit,
    /// The editor ran; the session is over.
    Launched,
}

/// The view the browser is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Listing,
    ContentView,
    IdeSelection,
}

/// A message shown over the current view until it expires.
#[derive(Debug, Clone)]
pub struct Notice {
    pub(crate) text: String,
    pub(crate) is_error: bool,
    pub(crate) since: Instant,
}

impl Notice {
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.is_error
    }
}

/// Central application state of lode.
pub struct AppState<'a> {
    pub(super) config: &'a Config,
    pub(super) keymap: Keymap,

    pub(super) mode: Mode,
    pub(super) nav: NavState,
    pub(super) content: ContentState,
    pub(super) editor_idx: usize,

    pub(super) renderer: Box<dyn ContentRenderer + 'a>,
    pub(super) launcher: Box<dyn EditorLauncher + 'a>,

    pub(super) viewport: (u16, u16),
    pub(super) notice: Option<Notice>,
}

impl<'a> AppState<'a> {
    /// Lists the configured root and starts in [Mode::Listing].
    ///
    /// # Errors
    /// [BrowseError::Read](crate::error::BrowseError::Read) when the root cannot be listed.
    pub fn new(
        config: &'a Config,
        renderer: Box<dyn ContentRenderer + 'a>,
        launcher: Box<dyn EditorLauncher + 'a>,
    ) -> Result<Self> {
        let root = config.general().root().to_path_buf();
        let entries = list_dir(&root)?;
        tracing::debug!(root = %root.display(), entries = entries.len(), "initial listing");

        Ok(Self {
            config,
            keymap: Keymap::from_config(config),
            mode: Mode::Listing,
            nav: NavState::new(root, entries),
            content: ContentState::default(),
            editor_idx: 0,
            renderer,
            launcher,
            viewport: (80, 24),
            notice: None,
        })
    }

    // Getters/ accessors

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    #[inline]
    pub fn content(&self) -> &ContentState {
        &self.content
    }

    #[inline]
    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }

    #[inline]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The editor highlighted in [Mode::IdeSelection].
    pub fn selected_editor(&self) -> Option<&'static IdeDescriptor> {
        EDITORS.get(self.editor_idx)
    }

    /// Lines of content visible at once.
    pub fn content_height(&self) -> usize {
        usize::from(self.viewport.1.saturating_sub(CHROME_ROWS))
    }

    /// Columns inside the content pane border.
    pub fn content_width(&self) -> usize {
        usize::from(self.viewport.0.saturating_sub(2))
    }

    /// Rows for the list view: the IDE list while selecting an editor, the
    /// directory listing otherwise.
    pub fn rows(&self) -> Vec<ListRow<'_>> {
        match self.mode {
            Mode::IdeSelection => EDITORS.iter().map(ListRow::Editor).collect(),
            Mode::Listing | Mode::ContentView => {
                self.nav.entries().iter().map(ListRow::from_entry).collect()
            }
        }
    }

    /// Index of the highlighted row in [rows](Self::rows).
    pub fn selected_row(&self) -> usize {
        match self.mode {
            Mode::IdeSelection => self.editor_idx,
            Mode::Listing | Mode::ContentView => self.nav.selected_idx(),
        }
    }

    /// Maps a key press to an [InputEvent](crate::app::InputEvent) and applies it.
    /// Unbound keys are ignored.
    pub fn handle_keypress(&mut self, key: KeyEvent) -> Result<KeypressResult> {
        match self.keymap.lookup(key) {
            Some(event) => self.handle_event(event),
            None => Ok(KeypressResult::Continue),
        }
    }

    /// Drops an expired notice. Returns `true` if the screen needs a redraw.
    pub fn tick(&mut self) -> bool {
        if self
            .notice
            .as_ref()
            .is_some_and(|n| n.since.elapsed() >= NOTICE_TIMEOUT)
        {
            self.notice = None;
            return true;
        }
        false
    }

    pub(super) fn notify(&mut self, text: impl Into<String>, is_error: bool) {
        self.notice = Some(Notice {
            text: text.into(),
            is_error,
            since: Instant::now(),
        });
    }
}
