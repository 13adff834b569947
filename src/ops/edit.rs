//! Open an existing (or new) entry file in the editor.

use crate::config::Config;
use crate::editor::{CursorPosition, Editor};
use crate::errors::AppResult;
use crate::journal_core::DateResolver;
use crate::journal_io::{ensure_journal_directory_exists, entry_path_for_date};
use std::path::PathBuf;
use tracing::info;

/// Opens the entry file for `date_expr` in `editor` and returns its path.
///
/// An expression that does not resolve opens today's file. The file is not
/// created beforehand; whether it is saved is up to the editor.
pub fn edit_entry(
    config: &Config,
    resolver: &DateResolver,
    date_expr: &str,
    editor: &dyn Editor,
) -> AppResult<PathBuf> {
    let date = resolver.resolve_or_today(Some(date_expr));
    let path = entry_path_for_date(&config.journal_dir, date);
    ensure_journal_directory_exists(&config.journal_dir)?;

    info!(path = %path.display(), "editing entry");
    editor.open(&path, CursorPosition::Default)?;
    Ok(path)
}
