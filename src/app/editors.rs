//! Editor choices and the row type shared by the directory and editor lists.

use crate::core::{Entry, EntryKind};

use std::borrow::Cow;

/// One external tool the selected path can be handed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdeDescriptor {
    pub label: &'static str,
    pub command: &'static str,
}

/// The fixed editor list offered in editor selection.
pub const EDITORS: &[IdeDescriptor] = &[
    IdeDescriptor {
        label: "VSCode",
        command: "code",
    },
    IdeDescriptor {
        label: "Neo vim",
        command: "nvim",
    },
    IdeDescriptor {
        label: "Rider",
        command: "rider",
    },
];

/// A row of the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRow<'a> {
    Directory(&'a Entry),
    File(&'a Entry),
    Editor(&'a IdeDescriptor),
}

impl<'a> ListRow<'a> {
    pub fn from_entry(entry: &'a Entry) -> Self {
        match entry.kind() {
            EntryKind::Directory => ListRow::Directory(entry),
            EntryKind::File => ListRow::File(entry),
        }
    }

    /// Text shown in the first line of the row.
    pub fn title(&self) -> Cow<'a, str> {
        match self {
            ListRow::Directory(e) | ListRow::File(e) => {
                Cow::Owned(format!("{} {}", e.icon(), e.name()))
            }
            ListRow::Editor(ide) => Cow::Borrowed(ide.label),
        }
    }

    /// Secondary text shown under the title.
    pub fn description(&self) -> Cow<'a, str> {
        match self {
            ListRow::Directory(_) => Cow::Borrowed("Directory"),
            ListRow::File(e) if e.language().is_empty() => Cow::Borrowed("File"),
            ListRow::File(e) => Cow::Owned(format!("File · {}", e.language())),
            ListRow::Editor(ide) => Cow::Owned(format!("runs `{}`", ide.command)),
        }
    }

    /// Stable identity: the entry path or the editor command.
    pub fn identity(&self) -> &'a str {
        match self {
            ListRow::Directory(e) | ListRow::File(e) => {
                e.path().to_str().unwrap_or_else(|| e.name())
            }
            ListRow::Editor(ide) => ide.command,
        }
    }
}
