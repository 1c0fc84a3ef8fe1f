//! Navigation state for lode.
//!
//! Holds the current directory with its last successful listing, the list
//! selection, the back history and the path chosen for the editor hand-off.

use crate::core::Entry;
use std::path::{Path, PathBuf};

pub struct NavState {
    current_dir: PathBuf,
    entries: Vec<Entry>,
    selected: usize,
    history: Vec<PathBuf>,
    selected_path: Option<PathBuf>,
}

impl NavState {
    pub fn new(current_dir: PathBuf, entries: Vec<Entry>) -> Self {
        Self {
            current_dir,
            entries,
            selected: 0,
            history: Vec::new(),
            selected_path: None,
        }
    }

    // Getters / Accessors

    #[inline]
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    pub fn selected_idx(&self) -> usize {
        self.selected
    }

    #[inline]
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.selected)
    }

    /// The directory the browser came from, if any.
    #[inline]
    pub fn previous_dir(&self) -> Option<&Path> {
        self.history.last().map(PathBuf::as_path)
    }

    #[inline]
    pub fn history(&self) -> &[PathBuf] {
        &self.history
    }

    #[inline]
    pub fn selected_path(&self) -> Option<&Path> {
        self.selected_path.as_deref()
    }

    // Navigation functions

    /// Moves the selection up by one entry, wrapping around.
    /// Returns `false` if there are no entries.
    pub fn move_up(&mut self) -> bool {
        let len = self.entries.len();
        if len == 0 {
            return false;
        }
        self.selected = if self.selected == 0 {
            len - 1
        } else {
            self.selected - 1
        };
        true
    }

    /// Moves the selection down by one entry, wrapping around.
    /// Returns `false` if there are no entries.
    pub fn move_down(&mut self) -> bool {
        let len = self.entries.len();
        if len == 0 {
            return false;
        }
        self.selected = (self.selected + 1) % len;
        true
    }

    /// Enters `dir` with its fresh listing, remembering the directory left behind.
    pub fn descend(&mut self, dir: PathBuf, entries: Vec<Entry>) {
        let old = std::mem::replace(&mut self.current_dir, dir);
        self.history.push(old);
        self.entries = entries;
        self.selected = 0;
    }

    /// Where a go-back lands: the last history entry, else the parent directory.
    pub fn back_target(&self) -> Option<&Path> {
        self.previous_dir().or_else(|| self.current_dir.parent())
    }

    /// Replaces the listing with the go-back target's, consuming one history entry
    /// when the target came from history.
    pub fn ascend(&mut self, target: PathBuf, entries: Vec<Entry>) {
        if self.history.last() == Some(&target) {
            self.history.pop();
        }
        self.current_dir = target;
        self.entries = entries;
        self.selected = 0;
    }

    pub fn set_selected_path(&mut self, path: PathBuf) {
        self.selected_path = Some(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntryKind;

    fn entries(dir: &Path, names: &[&str]) -> Vec<Entry> {
        names
            .iter()
            .map(|n| Entry::new(dir, n, EntryKind::File))
            .collect()
    }

    #[test]
    fn selection_wraps_both_ways() {
        let dir = PathBuf::from("/p");
        let mut nav = NavState::new(dir.clone(), entries(&dir, &["a", "b", "c"]));
        assert!(nav.move_up());
        assert_eq!(nav.selected_idx(), 2);
        assert!(nav.move_down());
        assert_eq!(nav.selected_idx(), 0);
    }

    #[test]
    fn empty_listing_does_not_move() {
        let mut nav = NavState::new(PathBuf::from("/p"), Vec::new());
        assert!(!nav.move_down());
        assert!(!nav.move_up());
        assert!(nav.selected_entry().is_none());
    }

    #[test]
    fn descend_then_ascend_uses_history() {
        let root = PathBuf::from("/p");
        let mut nav = NavState::new(root.clone(), entries(&root, &["a", "b"]));
        nav.move_down();

        let child = root.join("src");
        nav.descend(child.clone(), entries(&child, &["main.rs"]));
        assert_eq!(nav.current_dir(), child);
        assert_eq!(nav.previous_dir(), Some(root.as_path()));
        assert_eq!(nav.selected_idx(), 0);

        let target = nav.back_target().map(Path::to_path_buf);
        assert_eq!(target.as_deref(), Some(root.as_path()));
        nav.ascend(root.clone(), entries(&root, &["a", "b"]));
        assert_eq!(nav.current_dir(), root);
        assert!(nav.history().is_empty());
    }

    #[test]
    fn back_target_falls_back_to_parent() {
        let nav = NavState::new(PathBuf::from("/p/q"), Vec::new());
        assert_eq!(nav.back_target(), Some(Path::new("/p")));

        let at_root = NavState::new(PathBuf::from("/"), Vec::new());
        assert_eq!(at_root.back_target(), None);
    }
}
