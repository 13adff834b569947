//! Entry extraction, search and display formatting.
//!
//! An entry file is a sequence of paragraphs. Each paragraph opens with a
//! timestamp line such as `Fri 01/05/24 09:30:00` and runs until the next
//! blank line or the end of the file.

use crate::constants::{ENTRY_TIMESTAMP_FORMAT, ENTRY_TIMESTAMP_PATTERN};
use crate::errors::AppResult;
use chrono::NaiveDateTime;
use colored::Colorize;
use regex::{Captures, Regex, RegexBuilder};

/// A single timestamped journal record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The timestamp header line, without its trailing newline.
    pub timestamp: String,
    /// The text following the header, lines joined with `\n`.
    pub body: String,
}

impl Entry {
    /// Parses the timestamp header, if it follows the format the writer uses.
    pub fn written_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, ENTRY_TIMESTAMP_FORMAT).ok()
    }
}

/// Splits entry file content into [`Entry`] values.
pub struct EntryParser {
    header: Regex,
}

impl Default for EntryParser {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryParser {
    pub fn new() -> Self {
        Self {
            header: Regex::new(&format!("^{}$", ENTRY_TIMESTAMP_PATTERN))
                .expect("valid timestamp pattern"),
        }
    }

    /// Returns true if `line` is an entry timestamp header.
    pub fn is_header(&self, line: &str) -> bool {
        self.header.is_match(line.trim_end())
    }

    /// Extracts every entry in `content`, in file order.
    ///
    /// Text before the first header, or between a blank line and the next
    /// header, belongs to no entry and is dropped.
    pub fn extract(&self, content: &str) -> Vec<Entry> {
        let mut entries = Vec::new();
        let mut current: Option<(String, Vec<&str>)> = None;

        for line in content.lines() {
            match current.take() {
                None => {
                    if self.is_header(line) {
                        current = Some((line.trim_end().to_string(), Vec::new()));
                    }
                }
                Some((timestamp, body)) if line.is_empty() => {
                    entries.push(Entry {
                        timestamp,
                        body: body.join("\n"),
                    });
                }
                Some((timestamp, mut body)) => {
                    body.push(line);
                    current = Some((timestamp, body));
                }
            }
        }

        if let Some((timestamp, body)) = current {
            entries.push(Entry {
                timestamp,
                body: body.join("\n"),
            });
        }

        entries
    }
}

/// Decides which entries a search term selects.
///
/// The term is a regular expression. With smart-case on, a term whose first
/// character is lowercase matches case-insensitively and any other term
/// matches case-sensitively. Only that first character is consulted.
///
/// # Examples
///
/// ```
/// use journal::journal_core::SearchMatcher;
///
/// let lower = SearchMatcher::new("foo", true).unwrap();
/// assert!(lower.is_match("FOO BAR"));
///
/// let upper = SearchMatcher::new("Foo", true).unwrap();
/// assert!(!upper.is_match("foo bar"));
/// ```
#[derive(Debug, Clone)]
pub struct SearchMatcher {
    pattern: Regex,
}

impl SearchMatcher {
    /// Compiles `term`, returning `AppError::Search` if it is not a valid regex.
    pub fn new(term: &str, smartcase: bool) -> AppResult<Self> {
        let case_insensitive = smartcase && term.chars().next().is_some_and(char::is_lowercase);
        let pattern = RegexBuilder::new(term)
            .case_insensitive(case_insensitive)
            .build()?;
        Ok(Self { pattern })
    }

    /// Returns true if `text` contains a match.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Returns true if the body of `entry` contains a match.
    pub fn matches(&self, entry: &Entry) -> bool {
        self.is_match(&entry.body)
    }
}

/// Formats entries and raw files for the terminal.
///
/// When enabled, every timestamp header is painted bright magenta (`ESC[95m`
/// followed by a reset). Enabling it forces `colored` output on even when
/// stdout is not a terminal.
pub struct Highlighter {
    enabled: bool,
    timestamp_line: Regex,
}

impl Highlighter {
    pub fn new(enabled: bool) -> Self {
        if enabled {
            colored::control::set_override(true);
        }
        Self {
            enabled,
            timestamp_line: Regex::new(&format!("(?m)^{}$", ENTRY_TIMESTAMP_PATTERN))
                .expect("valid timestamp pattern"),
        }
    }

    /// Wraps `text` in the timestamp color, or returns it unchanged when disabled.
    pub fn paint(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.bright_magenta().to_string()
    }

    /// Highlights every timestamp line of a whole file.
    pub fn highlight_timestamps(&self, content: &str) -> String {
        if !self.enabled {
            return content.to_string();
        }
        self.timestamp_line
            .replace_all(content, |caps: &Captures| self.paint(&caps[0]))
            .into_owned()
    }

    /// Renders one entry as its highlighted header followed by its body.
    pub fn render_entry(&self, entry: &Entry) -> String {
        if entry.body.is_empty() {
            format!("{}\n", self.paint(&entry.timestamp))
        } else {
            format!("{}\n{}\n", self.paint(&entry.timestamp), entry.body)
        }
    }
}
