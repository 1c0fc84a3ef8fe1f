//! Extension classification for lode.
//!
//! Maps a lowercase filename extension to a language tag and a Nerd Font icon.
//! The lookup is total: unknown extensions get the generic file icon and an
//! empty tag, directories always get the folder icon.

use crate::utils::with_lowered_stack;

use phf::phf_map;

/// Icon used for every directory regardless of its name.
pub const FOLDER_ICON: &str = "\u{ea04}";
/// Icon used for files whose extension is not in [LANGUAGES].
pub const FILE_ICON: &str = "\u{e0f6}";

/// Icon and language tag of a recognized extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lang {
    pub icon: &'static str,
    pub tag: &'static str,
}

/// Extension to language mapping.
/// Keys are lowercase and carry no leading dot.
pub static LANGUAGES: phf::Map<&'static str, Lang> = phf_map! {
    "go" => Lang { icon: "\u{ea2b}", tag: "go" },
    "cpp" => Lang { icon: "\u{edb8}", tag: "cpp" },
    "cc" => Lang { icon: "\u{edb8}", tag: "cpp" },
    "cxx" => Lang { icon: "\u{edb8}", tag: "cpp" },
    "hpp" => Lang { icon: "\u{edb8}", tag: "cpp" },
    "c" => Lang { icon: "\u{edb1}", tag: "c" },
    "h" => Lang { icon: "\u{edb1}", tag: "c" },
    "py" => Lang { icon: "\u{ee10}", tag: "python" },
    "java" => Lang { icon: "\u{ede3}", tag: "java" },
    "js" => Lang { icon: "\u{ede6}", tag: "javascript" },
    "jsx" => Lang { icon: "\u{ede6}", tag: "javascript" },
    "ts" => Lang { icon: "\u{e73f}", tag: "typescript" },
    "tsx" => Lang { icon: "\u{e73f}", tag: "typescript" },
    "cs" => Lang { icon: "\u{edb9}", tag: "csharp" },
    "rs" => Lang { icon: "\u{e7a8}", tag: "rust" },
    "rb" => Lang { icon: "\u{e791}", tag: "ruby" },
    "html" => Lang { icon: "\u{ede0}", tag: "html" },
    "css" => Lang { icon: "\u{edbb}", tag: "css" },
    "scss" => Lang { icon: "\u{edbb}", tag: "css" },
    "md" => Lang { icon: "\u{e8e3}", tag: "markdown" },
    "markdown" => Lang { icon: "\u{e8e3}", tag: "markdown" },
};

/// Returns the extension of `name` without the dot, or `""`.
///
/// Dotfiles such as `.gitignore` have no extension.
pub fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx < name.len() - 1 => &name[idx + 1..],
        _ => "",
    }
}

/// Looks up the language for an extension, ignoring case and a leading dot.
pub fn lookup_extension(ext: &str) -> Option<Lang> {
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    if ext.is_empty() {
        return None;
    }
    if let Some(lang) = LANGUAGES.get(ext) {
        return Some(*lang);
    }
    with_lowered_stack(ext, |lowered| LANGUAGES.get(lowered).copied())
}

/// Classifies a file name into `(icon, language_tag)`.
pub fn classify(name: &str) -> (&'static str, &'static str) {
    match lookup_extension(extension_of(name)) {
        Some(lang) => (lang.icon, lang.tag),
        None => (FILE_ICON, ""),
    }
}

/// Classifies a directory. The name is irrelevant.
#[inline]
pub fn classify_dir() -> (&'static str, &'static str) {
    (FOLDER_ICON, "")
}
