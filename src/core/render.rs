//! Content rendering for the file view.
//!
//! Source files with a known extension go through syntect (tokenize, apply the
//! configured theme, emit 24-bit ANSI escapes). Everything else is treated as a
//! generic document: Markdown structure is rendered to styled terminal text and
//! plain text passes through readable.
//!
//! Rendering never fails outward. Invalid UTF-8 is decoded lossily and any
//! highlighter error degrades to the raw text.

use crate::utils::with_lowered_stack;

use phf::phf_map;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::{LinesWithEndings, as_24_bit_terminal_escaped};
use tracing::{debug, warn};

use std::fmt::Write;

/// Theme used when the configured one is not bundled with syntect.
pub const DEFAULT_SYNTAX_THEME: &str = "base16-ocean.dark";

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const ITALIC: &str = "\x1b[3m";
const UNDERLINE: &str = "\x1b[4m";
const STRIKE: &str = "\x1b[9m";
const HEADING: &str = "\x1b[1;38;5;212m";
const CODE: &str = "\x1b[38;5;215m";
const LINK: &str = "\x1b[4;38;5;117m";
const QUOTE: &str = "\x1b[38;5;244m";
const RULE: &str = "\x1b[38;5;238m";

/// Lines past this point are appended without highlighting.
const MAX_HIGHLIGHTED_LINES: usize = 5000;

/// Extensions that are syntax highlighted, mapped to syntect syntax names.
static HIGHLIGHTABLE: phf::Map<&'static str, &'static str> = phf_map! {
    "go" => "Go",
    "cpp" => "C++",
    "cc" => "C++",
    "cxx" => "C++",
    "hpp" => "C++",
    "c" => "C",
    "h" => "C",
    "py" => "Python",
    "java" => "Java",
    "js" => "JavaScript",
    "jsx" => "JavaScript",
    "ts" => "JavaScript",
    "tsx" => "JavaScript",
    "cs" => "C#",
    "rs" => "Rust",
    "html" => "HTML",
    "css" => "CSS",
};

/// Turns file bytes into a display string.
///
/// Implementations must be total: every input yields some non-empty string.
pub trait ContentRenderer {
    fn render(&self, content: &[u8], extension: &str) -> String;
}

/// Returns `true` when `extension` is rendered through the highlighter.
pub fn is_highlightable(extension: &str) -> bool {
    let ext = extension.strip_prefix('.').unwrap_or(extension);
    with_lowered_stack(ext, |lowered| HIGHLIGHTABLE.contains_key(lowered))
}

/// The syntect backed renderer used by the browser.
pub struct SyntectRenderer {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl SyntectRenderer {
    /// Loads the bundled syntaxes and the named theme.
    ///
    /// Unknown theme names fall back to [DEFAULT_SYNTAX_THEME].
    pub fn new(theme_name: &str) -> Self {
        let mut themes = ThemeSet::load_defaults();
        let theme = match themes.themes.remove(theme_name) {
            Some(theme) => theme,
            None => {
                warn!(
                    theme = theme_name,
                    "unknown syntax theme, using {}", DEFAULT_SYNTAX_THEME
                );
                themes
                    .themes
                    .remove(DEFAULT_SYNTAX_THEME)
                    .unwrap_or_default()
            }
        };

        SyntectRenderer {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            theme,
        }
    }

    /// Picks the syntax for an extension: the mapped name, then the extension
    /// itself, then first-line sniffing, then plain text.
    fn syntax_for(&self, ext: &str, text: &str) -> &SyntaxReference {
        HIGHLIGHTABLE
            .get(ext)
            .and_then(|name| self.syntaxes.find_syntax_by_name(name))
            .or_else(|| self.syntaxes.find_syntax_by_extension(ext))
            .or_else(|| self.syntaxes.find_syntax_by_first_line(text))
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text())
    }

    fn highlight(&self, text: &str, syntax: &SyntaxReference) -> Option<String> {
        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        let mut out = String::with_capacity(text.len() * 2);
        let mut lines = LinesWithEndings::from(text);

        for line in lines.by_ref().take(MAX_HIGHLIGHTED_LINES) {
            match highlighter.highlight_line(line, &self.syntaxes) {
                Ok(ranges) => out.push_str(&as_24_bit_terminal_escaped(&ranges, false)),
                Err(e) => {
                    debug!(error = %e, "highlighting failed, falling back to raw text");
                    return None;
                }
            }
        }
        out.push_str(RESET);

        for line in lines {
            out.push_str(line);
        }
        Some(out)
    }

    fn render_source(&self, text: &str, ext: &str) -> String {
        let syntax = self.syntax_for(ext, text);
        self.highlight(text, syntax)
            .unwrap_or_else(|| text.to_string())
    }

    fn render_document(&self, text: &str) -> String {
        MarkdownWriter::new(self).write(text)
    }
}

impl ContentRenderer for SyntectRenderer {
    fn render(&self, content: &[u8], extension: &str) -> String {
        if content.is_empty() {
            return "[empty file]".to_string();
        }

        let ext = extension.strip_prefix('.').unwrap_or(extension);
        let ext = ext.to_ascii_lowercase();
        let text = String::from_utf8_lossy(content);

        if text.trim().is_empty() {
            return format!("[{} bytes of whitespace]", content.len());
        }

        let text = sanitize_controls(&text);
        if is_highlightable(&ext) {
            self.render_source(&text, &ext)
        } else {
            self.render_document(&text)
        }
    }
}

/// Drops carriage returns and replaces other control characters except
/// newline and tab.
///
/// Keeps stray escape sequences in binary or log files from reaching the
/// terminal or the ANSI parser.
fn sanitize_controls(text: &str) -> String {
    text.chars()
        .filter(|&c| c != '\r')
        .map(|c| match c {
            '\n' | '\t' => c,
            c if c.is_control() => '\u{fffd}',
            c => c,
        })
        .collect()
}

/// Streams pulldown-cmark events into ANSI styled text.
struct MarkdownWriter<'r> {
    renderer: &'r SyntectRenderer,
    out: String,
    styles: Vec<&'static str>,
    lists: Vec<Option<u64>>,
    quote_depth: usize,
    code: Option<(String, String)>,
    link: Option<String>,
}

impl<'r> MarkdownWriter<'r> {
    fn new(renderer: &'r SyntectRenderer) -> Self {
        Self {
            renderer,
            out: String::new(),
            styles: Vec::new(),
            lists: Vec::new(),
            quote_depth: 0,
            code: None,
            link: None,
        }
    }

    fn write(mut self, text: &str) -> String {
        let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
        for event in Parser::new_ext(text, options) {
            self.event(event);
        }
        let trimmed = self.out.trim_end().len();
        self.out.truncate(trimmed);
        self.out.push_str(RESET);
        self.out.push('\n');
        self.out
    }

    fn push_style(&mut self, style: &'static str) {
        self.styles.push(style);
        self.out.push_str(style);
    }

    fn pop_style(&mut self) {
        self.styles.pop();
        self.out.push_str(RESET);
        for style in &self.styles {
            self.out.push_str(style);
        }
    }

    fn blank_line(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with("\n\n") {
            if !self.out.ends_with('\n') {
                self.out.push('\n');
            }
            self.out.push('\n');
        }
    }

    fn newline(&mut self) {
        self.out.push('\n');
        self.indent();
    }

    fn indent(&mut self) {
        for _ in 0..self.quote_depth {
            let _ = write!(self.out, "{QUOTE}│ {RESET}");
        }
        for style in &self.styles {
            self.out.push_str(style);
        }
    }

    fn event(&mut self, event: Event<'_>) {
        if let Some((_, body)) = self.code.as_mut() {
            match event {
                Event::Text(text) => body.push_str(&text),
                Event::End(TagEnd::CodeBlock) => self.finish_code_block(),
                _ => {}
            }
            return;
        }

        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.out.push_str(&text),
            Event::Code(code) => {
                let _ = write!(self.out, "{CODE}`{code}`{RESET}");
                for style in &self.styles {
                    self.out.push_str(style);
                }
            }
            Event::SoftBreak | Event::HardBreak => self.newline(),
            Event::Rule => {
                self.blank_line();
                let _ = writeln!(self.out, "{RULE}{}{RESET}", "─".repeat(40));
            }
            Event::Html(html) | Event::InlineHtml(html) => self.out.push_str(&html),
            Event::TaskListMarker(done) => {
                self.out.push_str(if done { "[x] " } else { "[ ] " });
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if self.lists.is_empty() {
                    self.blank_line();
                    self.indent();
                }
            }
            Tag::Heading { level, .. } => {
                self.blank_line();
                self.indent();
                let hashes = match level {
                    HeadingLevel::H1 => "#",
                    HeadingLevel::H2 => "##",
                    HeadingLevel::H3 => "###",
                    HeadingLevel::H4 => "####",
                    HeadingLevel::H5 => "#####",
                    HeadingLevel::H6 => "######",
                };
                self.push_style(HEADING);
                let _ = write!(self.out, "{hashes} ");
            }
            Tag::BlockQuote(_) => {
                self.blank_line();
                self.quote_depth += 1;
            }
            Tag::CodeBlock(kind) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .unwrap_or_default()
                        .to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                self.blank_line();
                self.code = Some((lang, String::new()));
            }
            Tag::List(start) => {
                if self.lists.is_empty() {
                    self.blank_line();
                }
                self.lists.push(start);
            }
            Tag::Item => {
                if !self.out.ends_with('\n') {
                    self.out.push('\n');
                }
                self.indent();
                let depth = self.lists.len().saturating_sub(1);
                self.out.push_str(&"  ".repeat(depth));
                match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let _ = write!(self.out, "{}. ", n);
                        *n += 1;
                    }
                    _ => self.out.push_str("• "),
                }
            }
            Tag::Emphasis => self.push_style(ITALIC),
            Tag::Strong => self.push_style(BOLD),
            Tag::Strikethrough => self.push_style(STRIKE),
            Tag::Link { dest_url, .. } => {
                self.link = Some(dest_url.to_string());
                self.push_style(LINK);
            }
            Tag::Image { dest_url, .. } => {
                self.link = Some(dest_url.to_string());
                self.out.push_str("[image: ");
            }
            Tag::TableHead => self.push_style(UNDERLINE),
            Tag::TableRow => {
                if !self.out.ends_with('\n') {
                    self.out.push('\n');
                }
                self.indent();
            }
            Tag::TableCell => self.out.push_str("│ "),
            Tag::Table(_) => self.blank_line(),
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                if self.lists.is_empty() {
                    self.out.push('\n');
                }
            }
            TagEnd::Heading(_) => {
                self.pop_style();
                self.out.push('\n');
            }
            TagEnd::BlockQuote(_) => {
                self.quote_depth = self.quote_depth.saturating_sub(1);
                self.out.push('\n');
            }
            TagEnd::List(_) => {
                self.lists.pop();
                if self.lists.is_empty() {
                    self.out.push('\n');
                }
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => self.pop_style(),
            TagEnd::Link => {
                self.pop_style();
                if let Some(url) = self.link.take() {
                    let _ = write!(self.out, " ({url})");
                }
            }
            TagEnd::Image => {
                if let Some(url) = self.link.take() {
                    let _ = write!(self.out, " ({url})");
                }
                self.out.push(']');
            }
            TagEnd::TableHead => {
                self.pop_style();
            }
            TagEnd::TableCell => self.out.push(' '),
            TagEnd::Table => self.out.push('\n'),
            _ => {}
        }
    }

    fn finish_code_block(&mut self) {
        let Some((lang, body)) = self.code.take() else {
            return;
        };

        let lowered = lang.to_ascii_lowercase();
        let highlighted = if lowered.is_empty() {
            None
        } else {
            let syntaxes = &self.renderer.syntaxes;
            syntaxes
                .find_syntax_by_token(&lowered)
                .or_else(|| {
                    HIGHLIGHTABLE
                        .get(lowered.as_str())
                        .and_then(|name| syntaxes.find_syntax_by_name(name))
                })
                .and_then(|syntax| self.renderer.highlight(&body, syntax))
        };

        match highlighted {
            Some(text) => self.out.push_str(&text),
            None => {
                let _ = write!(self.out, "{CODE}{body}{RESET}");
            }
        }
        if !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }
}
