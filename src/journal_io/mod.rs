//! Journal I/O operations and file management.
//!
//! This module contains the filesystem side of the journal: naming entry
//! files, locating them by embedded date, reading them, and appending to
//! them. It never launches processes; see [`crate::editor`] for that.

use crate::constants::{DATE_FORMAT_ISO, ENTRY_FILE_DATE_PATTERN, ENTRY_FILE_EXTENSION};
use crate::errors::{AppError, AppResult};
use crate::journal_core::EntryFilter;
use chrono::NaiveDate;
use regex::Regex;
use std::fs::{self, OpenOptions};
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// An entry file found in a journal directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFile {
    /// Full path to the file.
    pub path: PathBuf,
    /// The date embedded in the file name.
    pub date: NaiveDate,
}

/// Ensures the journal directory exists, creating it if necessary.
///
/// Newly created directories get 0o700 permissions on Unix.
///
/// # Errors
///
/// Returns:
/// - `AppError::Journal` if the provided path is not an absolute path
/// - `AppError::Io` if the directory creation fails
pub fn ensure_journal_directory_exists(journal_dir: &Path) -> AppResult<()> {
    if !journal_dir.is_absolute() {
        return Err(AppError::Journal(format!(
            "Journal directory path must be absolute: {}",
            journal_dir.display()
        )));
    }

    if !journal_dir.exists() {
        fs::create_dir_all(journal_dir).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create journal directory: {}", e),
            ))
        })?;

        #[cfg(unix)]
        {
            fs::set_permissions(journal_dir, fs::Permissions::from_mode(0o700))?;
            debug!("Set 0o700 permissions on journal directory");
        }
    }
    Ok(())
}

/// The file name holding entries for `date`, e.g. `2024-01-05.txt`.
pub fn entry_file_name(date: NaiveDate) -> String {
    format!("{}.{}", date.format(DATE_FORMAT_ISO), ENTRY_FILE_EXTENSION)
}

/// The path of the entry file for `date` inside `journal_dir`.
///
/// # Examples
///
/// ```
/// use journal::journal_io::entry_path_for_date;
/// use chrono::NaiveDate;
/// use std::path::Path;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// assert_eq!(
///     entry_path_for_date(Path::new("/journal"), date),
///     Path::new("/journal/2024-01-05.txt")
/// );
/// ```
pub fn entry_path_for_date(journal_dir: &Path, date: NaiveDate) -> PathBuf {
    journal_dir.join(entry_file_name(date))
}

fn entry_file_date(date_pattern: &Regex, file_name: &str) -> Option<NaiveDate> {
    let token = date_pattern.captures(file_name)?.get(1)?.as_str();
    NaiveDate::parse_from_str(token, DATE_FORMAT_ISO).ok()
}

/// Finds the entry files directly inside `root` that pass `filter`.
///
/// Files are recognized by a `*-*-*.txt` name carrying a `YYYY-MM-DD` date.
/// Directories, unreadable directory entries and names without a parseable
/// date are skipped. The result is sorted by date, then path, so output is
/// chronological regardless of directory order.
pub fn locate_entry_files(root: &Path, filter: &EntryFilter) -> Vec<EntryFile> {
    let date_pattern = Regex::new(ENTRY_FILE_DATE_PATTERN).expect("valid entry file pattern");

    let mut files: Vec<EntryFile> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!(error = %e, "skipping unreadable directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let date = entry
                .file_name()
                .to_str()
                .and_then(|name| entry_file_date(&date_pattern, name));
            match date {
                Some(date) => Some(EntryFile {
                    path: entry.into_path(),
                    date,
                }),
                None => {
                    debug!(path = %entry.path().display(), "skipping file without an entry date");
                    None
                }
            }
        })
        .filter(|file| filter.matches(file.date))
        .collect();

    files.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.path.cmp(&b.path)));
    files
}

/// Reads the content of an entry file.
///
/// # Errors
///
/// Returns `AppError::Io` if the file can't be opened or isn't valid UTF-8.
pub fn read_file_content(path: &Path) -> AppResult<String> {
    Ok(fs::read_to_string(path)?)
}

/// Appends `content` to the entry file at `path` in a single write,
/// creating the file (0o600 on Unix) if it doesn't exist.
///
/// # Errors
///
/// Returns `AppError::Io` if the file couldn't be opened or written.
pub fn append_to_entry_file(path: &Path, content: &str) -> AppResult<()> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn dates(files: &[EntryFile]) -> Vec<NaiveDate> {
        files.iter().map(|file| file.date).collect()
    }

    #[test]
    fn test_entry_file_name() {
        assert_eq!(entry_file_name(jan(5)), "2024-01-05.txt");
    }

    #[test]
    fn test_locate_sorts_and_skips_noise() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        for name in ["2024-01-10.txt", "2024-01-01.txt", "2024-01-05.txt"] {
            fs::write(root.join(name), "x").unwrap();
        }
        fs::write(root.join("notes.txt"), "x").unwrap();
        fs::write(root.join("2024-01-07.md"), "x").unwrap();
        fs::write(root.join("2024-13-40.txt"), "x").unwrap();
        fs::create_dir(root.join("2024-01-02.txt")).unwrap();
        fs::create_dir(root.join("archive")).unwrap();
        fs::write(root.join("archive").join("2024-01-03.txt"), "x").unwrap();

        let files = locate_entry_files(root, &EntryFilter::default());
        assert_eq!(dates(&files), vec![jan(1), jan(5), jan(10)]);
        assert_eq!(files[0].path, root.join("2024-01-01.txt"));
    }

    #[test]
    fn test_locate_applies_filter() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        for name in ["2024-01-01.txt", "2024-01-05.txt", "2024-01-10.txt"] {
            fs::write(root.join(name), "x").unwrap();
        }

        let range = EntryFilter {
            since: Some(jan(3)),
            until: Some(jan(7)),
            on: None,
        };
        assert_eq!(dates(&locate_entry_files(root, &range)), vec![jan(5)]);

        let on = EntryFilter {
            since: Some(jan(8)),
            until: None,
            on: Some(jan(5)),
        };
        assert_eq!(dates(&locate_entry_files(root, &on)), vec![jan(5)]);

        let since = EntryFilter {
            since: Some(jan(5)),
            ..EntryFilter::default()
        };
        assert_eq!(dates(&locate_entry_files(root, &since)), vec![jan(5), jan(10)]);
    }

    #[test]
    fn test_locate_missing_root_is_empty() {
        let temp_dir = tempdir().unwrap();
        let files = locate_entry_files(&temp_dir.path().join("absent"), &EntryFilter::default());
        assert!(files.is_empty());
    }

    #[test]
    fn test_append_creates_then_appends() {
        let temp_dir = tempdir().unwrap();
        let path = entry_path_for_date(temp_dir.path(), jan(5));

        append_to_entry_file(&path, "\nFri 01/05/24 09:00:00\n- one\n").unwrap();
        append_to_entry_file(&path, "\nFri 01/05/24 10:00:00\n- two\n").unwrap();

        assert_eq!(
            read_file_content(&path).unwrap(),
            "\nFri 01/05/24 09:00:00\n- one\n\nFri 01/05/24 10:00:00\n- two\n"
        );

        #[cfg(unix)]
        {
            let mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn test_ensure_journal_directory_exists() {
        let temp_dir = tempdir().unwrap();
        let journal_dir = temp_dir.path().join("new_journal");
        assert!(!journal_dir.exists());

        ensure_journal_directory_exists(&journal_dir).unwrap();
        assert!(journal_dir.is_dir());

        #[cfg(unix)]
        {
            let mode = fs::metadata(&journal_dir).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o700);
        }

        // Existing directory is fine.
        ensure_journal_directory_exists(&journal_dir).unwrap();
    }

    #[test]
    fn test_ensure_journal_directory_rejects_relative_path() {
        match ensure_journal_directory_exists(Path::new("relative/journal")) {
            Err(AppError::Journal(msg)) => assert!(msg.contains("must be absolute")),
            _ => panic!("Expected AppError::Journal variant"),
        }
    }
}
