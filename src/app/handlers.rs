//! Transition handlers for lode.
//!
//! Implements [AppState::handle_event], the navigation state machine. Every
//! transition either applies fully or leaves the state untouched.

use crate::app::editors::EDITORS;
use crate::app::keymap::InputEvent;
use crate::app::state::{AppState, KeypressResult, Mode};
use crate::core::list_dir;
use crate::error::{BrowseError, Result};

use std::fs;

impl<'a> AppState<'a> {
    /// Applies one input event in the current mode.
    ///
    /// # Errors
    /// Launch errors always, and read errors when `fatal_read_errors` is set.
    /// Otherwise read errors are shown as a notice and the state is unchanged.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<KeypressResult> {
        tracing::trace!(?event, mode = ?self.mode, "input");

        let result = match (self.mode, event) {
            (_, InputEvent::Quit) => Ok(KeypressResult::Quit),
            (_, InputEvent::Resize(w, h)) => {
                self.handle_resize(w, h);
                Ok(KeypressResult::Continue)
            }

            (Mode::Listing, InputEvent::Activate) => self.handle_activate_entry(),
            (Mode::Listing, InputEvent::GoBack) => self.handle_go_back(),
            (Mode::Listing, InputEvent::RequestEditorSelection) => {
                self.handle_editor_request();
                Ok(KeypressResult::Continue)
            }
            (Mode::Listing, InputEvent::NavigateUp) => {
                self.nav.move_up();
                Ok(KeypressResult::Continue)
            }
            (Mode::Listing, InputEvent::NavigateDown) => {
                self.nav.move_down();
                Ok(KeypressResult::Continue)
            }

            (Mode::ContentView, InputEvent::Cancel) => {
                self.enter_mode(Mode::Listing);
                Ok(KeypressResult::Continue)
            }
            (Mode::ContentView, InputEvent::NavigateUp) => {
                self.content.scroll_up();
                Ok(KeypressResult::Continue)
            }
            (Mode::ContentView, InputEvent::NavigateDown) => {
                let height = self.content_height();
                self.content.scroll_down(height);
                Ok(KeypressResult::Continue)
            }

            (Mode::IdeSelection, InputEvent::Activate) => self.handle_launch(),
            (Mode::IdeSelection, InputEvent::Cancel) => {
                self.enter_mode(Mode::Listing);
                Ok(KeypressResult::Continue)
            }
            (Mode::IdeSelection, InputEvent::NavigateUp) => {
                self.editor_idx = self.editor_idx.checked_sub(1).unwrap_or(EDITORS.len() - 1);
                Ok(KeypressResult::Continue)
            }
            (Mode::IdeSelection, InputEvent::NavigateDown) => {
                self.editor_idx = (self.editor_idx + 1) % EDITORS.len();
                Ok(KeypressResult::Continue)
            }

            _ => Ok(KeypressResult::Continue),
        };

        self.surface(result)
    }

    /// Descends into the selected directory or renders the selected file.
    fn handle_activate_entry(&mut self) -> Result<KeypressResult> {
        let Some(entry) = self.nav.selected_entry() else {
            return Ok(KeypressResult::Continue);
        };
        let path = entry.path().to_path_buf();

        if entry.is_dir() {
            let entries = list_dir(&path)?;
            tracing::debug!(dir = %path.display(), entries = entries.len(), "descend");
            self.nav.descend(path.clone(), entries);
            self.nav.set_selected_path(path);
        } else {
            let extension = entry.extension().to_string();
            let bytes = fs::read(&path).map_err(|e| BrowseError::read(&path, e))?;
            let rendered = self.renderer.render(&bytes, &extension);
            tracing::debug!(file = %path.display(), bytes = bytes.len(), "view");
            let width = self.content_width();
            self.content.set(rendered, width);
            self.nav.set_selected_path(path);
            self.enter_mode(Mode::ContentView);
        }
        Ok(KeypressResult::Continue)
    }

    /// Returns to the previous directory, or the parent when there is no history.
    fn handle_go_back(&mut self) -> Result<KeypressResult> {
        let Some(target) = self.nav.back_target().map(|p| p.to_path_buf()) else {
            tracing::debug!(dir = %self.nav.current_dir().display(), "go back at root ignored");
            return Ok(KeypressResult::Continue);
        };

        let entries = list_dir(&target)?;
        tracing::debug!(dir = %target.display(), entries = entries.len(), "go back");
        self.nav.ascend(target, entries);
        Ok(KeypressResult::Continue)
    }

    fn handle_editor_request(&mut self) {
        if self.nav.selected_path().is_none() {
            self.notify(
                "Open a directory or file first, then choose an editor",
                false,
            );
            return;
        }
        self.editor_idx = 0;
        self.enter_mode(Mode::IdeSelection);
    }

    /// Hands the selected path to the highlighted editor.
    fn handle_launch(&mut self) -> Result<KeypressResult> {
        let target = self
            .nav
            .selected_path()
            .map(|p| p.to_path_buf())
            .ok_or(BrowseError::NoSelection)?;
        let Some(ide) = self.selected_editor() else {
            return Ok(KeypressResult::Continue);
        };

        tracing::debug!(editor = ide.label, target = %target.display(), "editor chosen");
        self.launcher.launch(ide.command, &target)?;
        Ok(KeypressResult::Launched)
    }

    fn handle_resize(&mut self, w: u16, h: u16) {
        self.viewport = (w, h);
        let (width, height) = (self.content_width(), self.content_height());
        self.content.rewrap(width);
        self.content.clamp(height);
    }

    fn enter_mode(&mut self, mode: Mode) {
        tracing::debug!(from = ?self.mode, to = ?mode, "mode change");
        self.mode = mode;
    }

    /// Applies the read error policy: softened errors become a notice.
    fn surface(&mut self, result: Result<KeypressResult>) -> Result<KeypressResult> {
        match result {
            Err(err) if err.is_read() && !self.config.general().fatal_read_errors() => {
                tracing::warn!(error = %err, "transition aborted");
                self.notify(err.to_string(), true);
                Ok(KeypressResult::Continue)
            }
            Err(err) => {
                tracing::warn!(error = %err, "fatal error");
                Err(err)
            }
            ok => ok,
        }
    }
}
