//! Directory listing for lode.
//!
//! Provides the [Entry] struct which is used throughout lode and [list_dir], the
//! only function that enumerates directories for the browser.

use crate::core::classify::{classify, classify_dir, extension_of};
use crate::error::{BrowseError, Result};

use std::fs;
use std::path::{Path, PathBuf};

/// Whether an entry is a directory or anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// A single classified child of a listed directory.
///
/// Immutable once built; a new listing replaces the whole set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    kind: EntryKind,
    path: PathBuf,
    extension: String,
    icon: &'static str,
    language: &'static str,
}

impl Entry {
    /// Builds and classifies an entry for `name` inside `dir`.
    pub fn new(dir: &Path, name: &str, kind: EntryKind) -> Self {
        let (icon, language, extension) = match kind {
            EntryKind::Directory => {
                let (icon, language) = classify_dir();
                (icon, language, String::new())
            }
            EntryKind::File => {
                let (icon, language) = classify(name);
                (icon, language, extension_of(name).to_ascii_lowercase())
            }
        };
        Entry {
            name: name.to_string(),
            kind,
            path: dir.join(name),
            extension,
            icon,
            language,
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lowercase extension without the dot, empty for directories.
    #[inline]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    #[inline]
    pub fn icon(&self) -> &'static str {
        self.icon
    }

    #[inline]
    pub fn language(&self) -> &'static str {
        self.language
    }
}

/// Reads the immediate children of `path` in filesystem enumeration order.
///
/// The kind of each child comes from its metadata; symlinks are followed and a
/// dangling link is listed as a file. Children that vanish or fail to stat
/// mid-enumeration are skipped.
///
/// # Errors
/// [BrowseError::Read] when the directory cannot be opened or enumerated.
pub fn list_dir(path: &Path) -> Result<Vec<Entry>> {
    let reader = fs::read_dir(path).map_err(|e| BrowseError::read(path, e))?;
    let mut entries = Vec::with_capacity(64);

    for entry in reader {
        let entry = entry.map_err(|e| BrowseError::read(path, e))?;
        let ft = match entry.file_type() {
            Ok(ft) => ft,
            Err(_) => continue,
        };

        let is_dir = if ft.is_symlink() {
            fs::metadata(entry.path()).is_ok_and(|md| md.is_dir())
        } else {
            ft.is_dir()
        };

        let name = entry.file_name();
        let kind = if is_dir {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        entries.push(Entry::new(path, &name.to_string_lossy(), kind));
    }

    Ok(entries)
}
