//! Append new entries to a journal.

use crate::config::Config;
use crate::constants::{ENTRY_TEXT_MARKER, ENTRY_TIMESTAMP_FORMAT};
use crate::editor::{CursorPosition, Editor};
use crate::errors::AppResult;
use crate::journal_core::DateResolver;
use crate::journal_io::{append_to_entry_file, ensure_journal_directory_exists, entry_path_for_date};
use chrono::{NaiveDateTime, NaiveTime};
use std::path::PathBuf;
use tracing::{debug, info};

/// Appends a new entry and returns the path of the file it went into.
///
/// # Flow
///
/// 1. Resolve `date_expr`. A resolved date is stamped at midnight; no
///    expression, or one that does not resolve, is stamped with the current
///    time.
/// 2. Ensure the journal directory exists.
/// 3. With `text`, append the timestamp and the words joined by spaces as a
///    `- ` line, in one write.
/// 4. Without `text`, append only the timestamp and open `editor` at the end
///    of the file.
///
/// # Errors
///
/// Returns an error if:
/// - The journal directory cannot be created
/// - The entry file cannot be written
/// - The editor fails to launch or exits unsuccessfully
pub fn write_entry(
    config: &Config,
    resolver: &DateResolver,
    date_expr: Option<&str>,
    text: &[String],
    editor: &dyn Editor,
) -> AppResult<PathBuf> {
    let written_at = entry_timestamp(resolver, date_expr);
    let path = entry_path_for_date(&config.journal_dir, written_at.date());
    ensure_journal_directory_exists(&config.journal_dir)?;

    let header = written_at.format(ENTRY_TIMESTAMP_FORMAT);
    if text.is_empty() {
        append_to_entry_file(&path, &format!("\n{}\n", header))?;
        debug!(path = %path.display(), "opening editor for new entry");
        editor.open(&path, CursorPosition::End)?;
    } else {
        let body = text.join(" ");
        append_to_entry_file(&path, &format!("\n{}\n{}{}\n", header, ENTRY_TEXT_MARKER, body))?;
    }

    info!(path = %path.display(), "entry written");
    Ok(path)
}

fn entry_timestamp(resolver: &DateResolver, date_expr: Option<&str>) -> NaiveDateTime {
    match date_expr.and_then(|expr| resolver.resolve(expr)) {
        Some(date) => date.and_time(NaiveTime::MIN),
        None => resolver.now(),
    }
}
