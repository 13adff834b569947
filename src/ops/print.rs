//! Print journal entries matching date filters and an optional search term.

use crate::config::Config;
use crate::errors::AppResult;
use crate::journal_core::{EntryFilter, EntryParser, Highlighter, SearchMatcher};
use crate::journal_io::{locate_entry_files, read_file_content};
use std::io::Write;
use tracing::{debug, info};

/// Writes the entries selected by `filter` and `search_term` to `out`.
///
/// Without a search term, every selected file is written whole with its
/// timestamps highlighted. With one, only the entries whose body matches are
/// written, each as its header followed by its body, separated by blank
/// lines so the output keeps the paragraph layout of an entry file.
///
/// Files that cannot be read are skipped.
///
/// # Errors
///
/// Returns `AppError::Search` if `search_term` is not a valid regular
/// expression, before any file is read, or `AppError::Io` if writing to
/// `out` fails.
pub fn print_entries<W: Write>(
    out: &mut W,
    config: &Config,
    filter: &EntryFilter,
    search_term: Option<&str>,
) -> AppResult<()> {
    let matcher = search_term
        .map(|term| SearchMatcher::new(term, config.smartcase))
        .transpose()?;
    let highlighter = Highlighter::new(config.color);
    let parser = EntryParser::new();

    let files = locate_entry_files(&config.journal_dir, filter);
    info!(count = files.len(), "entry files selected");

    let mut matched = 0usize;

    for file in files {
        let content = match read_file_content(&file.path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %file.path.display(), error = %e, "skipping unreadable entry file");
                continue;
            }
        };

        match &matcher {
            None => write!(out, "{}", highlighter.highlight_timestamps(&content))?,
            Some(matcher) => {
                for entry in parser.extract(&content).iter().filter(|e| matcher.matches(e)) {
                    if matched > 0 {
                        writeln!(out)?;
                    }
                    write!(out, "{}", highlighter.render_entry(entry))?;
                    matched += 1;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use chrono::NaiveDate;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn config_for(dir: &Path) -> Config {
        Config {
            journal_dir: dir.to_path_buf(),
            color: false,
            ..Config::default()
        }
    }

    fn render(config: &Config, filter: &EntryFilter, term: Option<&str>) -> String {
        let mut out = Vec::new();
        print_entries(&mut out, config, filter, term).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn seed(dir: &Path) {
        fs::write(
            dir.join("2024-01-05.txt"),
            "\nFri 01/05/24 09:00:00\n- Coffee with Sam\n\nFri 01/05/24 18:00:00\n- gym\n",
        )
        .unwrap();
        fs::write(dir.join("2024-01-01.txt"), "\nMon 01/01/24 10:00:00\n- new year\n").unwrap();
    }

    #[test]
    fn test_prints_whole_files_in_date_order() {
        let temp_dir = tempdir().unwrap();
        seed(temp_dir.path());

        let output = render(&config_for(temp_dir.path()), &EntryFilter::default(), None);
        assert_eq!(
            output,
            "\nMon 01/01/24 10:00:00\n- new year\n\nFri 01/05/24 09:00:00\n- Coffee with Sam\n\nFri 01/05/24 18:00:00\n- gym\n"
        );
    }

    #[test]
    fn test_search_prints_matching_entries_only() {
        let temp_dir = tempdir().unwrap();
        seed(temp_dir.path());

        let output = render(&config_for(temp_dir.path()), &EntryFilter::default(), Some("coffee"));
        assert_eq!(output, "Fri 01/05/24 09:00:00\n- Coffee with Sam\n");
    }

    #[test]
    fn test_search_separates_matches_with_blank_lines() {
        let temp_dir = tempdir().unwrap();
        seed(temp_dir.path());
        fs::write(
            temp_dir.path().join("2024-01-06.txt"),
            "\nSat 01/06/24 08:00:00\n- coffee one\n\nSat 01/06/24 12:00:00\n- lunch\n\nSat 01/06/24 16:00:00\n- coffee two\n",
        )
        .unwrap();

        let output = render(&config_for(temp_dir.path()), &EntryFilter::default(), Some("coffee"));
        assert_eq!(
            output,
            "Fri 01/05/24 09:00:00\n- Coffee with Sam\n\nSat 01/06/24 08:00:00\n- coffee one\n\nSat 01/06/24 16:00:00\n- coffee two\n"
        );

        let reparsed = EntryParser::new().extract(&output);
        assert_eq!(reparsed.len(), 3);
        assert_eq!(reparsed[2].body, "- coffee two");
    }

    #[test]
    fn test_search_respects_smartcase_setting() {
        let temp_dir = tempdir().unwrap();
        seed(temp_dir.path());

        let mut config = config_for(temp_dir.path());
        config.smartcase = false;
        let output = render(&config, &EntryFilter::default(), Some("coffee"));
        assert!(output.is_empty());
    }

    #[test]
    fn test_filter_limits_files() {
        let temp_dir = tempdir().unwrap();
        seed(temp_dir.path());

        let filter = EntryFilter {
            on: NaiveDate::from_ymd_opt(2024, 1, 1),
            ..EntryFilter::default()
        };
        let output = render(&config_for(temp_dir.path()), &filter, None);
        assert_eq!(output, "\nMon 01/01/24 10:00:00\n- new year\n");
    }

    #[test]
    fn test_color_highlights_timestamps() {
        let temp_dir = tempdir().unwrap();
        seed(temp_dir.path());

        let mut config = config_for(temp_dir.path());
        config.color = true;
        let output = render(&config, &EntryFilter::default(), Some("gym"));
        assert_eq!(output, "\x1b[95mFri 01/05/24 18:00:00\x1b[0m\n- gym\n");
    }

    #[test]
    fn test_invalid_search_term_fails() {
        let temp_dir = tempdir().unwrap();
        let mut out = Vec::new();
        let result = print_entries(
            &mut out,
            &config_for(temp_dir.path()),
            &EntryFilter::default(),
            Some("(unclosed"),
        );
        assert!(matches!(result, Err(AppError::Search(_))));
    }

    #[test]
    fn test_unreadable_file_is_skipped() {
        let temp_dir = tempdir().unwrap();
        seed(temp_dir.path());
        // Invalid UTF-8 makes read_to_string fail.
        fs::write(temp_dir.path().join("2024-01-03.txt"), [0xff, 0xfe, 0x00]).unwrap();

        let output = render(&config_for(temp_dir.path()), &EntryFilter::default(), None);
        assert!(output.contains("- new year"));
        assert!(output.contains("- gym"));
    }
}
