use crate::constants::{APP_DESCRIPTION, APP_NAME, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use clap::Parser;

/// Command line journaling application
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Config file to use (default is ~/.journalrc)
    #[clap(short = 'c', long)]
    pub config: Option<String>,

    /// Enable debug output
    #[clap(long)]
    pub debug: bool,

    /// Journal to use (default is journal.default from the config)
    #[clap(short = 'j', long)]
    pub journal: Option<String>,

    /// Date for the new entry, e.g. "yesterday" or "2024-01-05"
    #[clap(long)]
    pub date: Option<String>,

    /// Show entries on or after this date
    #[clap(long)]
    pub since: Option<String>,

    /// Show entries on or before this date
    #[clap(long)]
    pub until: Option<String>,

    /// Show entries on this date only
    #[clap(long)]
    pub on: Option<String>,

    /// Show entries whose text matches this regular expression
    #[clap(short = 's', long)]
    pub search: Option<String>,

    /// Lowercase search terms ignore case (use --smartcase=false to disable)
    #[clap(long, value_name = "BOOL", action = clap::ArgAction::Set, num_args = 0..=1, require_equals = true, default_value_t = true, default_missing_value = "true")]
    pub smartcase: bool,

    /// Open the entry file for this date in the editor
    #[clap(short = 'e', long)]
    pub edit: Option<String>,

    /// Disable timestamp highlighting
    #[clap(long)]
    pub no_color: bool,

    /// Log output format
    #[clap(long, value_name = "FORMAT", default_value = LOG_FORMAT_TEXT, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: String,

    /// Text of the new entry; the editor opens when empty
    #[clap(value_name = "TEXT")]
    pub text: Vec<String>,
}

/// What a single invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print entries selected by date filters and an optional search.
    Print,
    /// Open the entry file for the given date expression.
    Edit(String),
    /// Append a new entry.
    Write,
}

impl CliArgs {
    /// Selects the mode. Any viewing flag wins over `--edit`, and `--edit`
    /// wins over writing.
    ///
    /// Empty values count as not given.
    pub fn mode(&self) -> Mode {
        let given = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
        let viewing = given(&self.since) || given(&self.until) || given(&self.on) || given(&self.search);

        if viewing {
            Mode::Print
        } else if given(&self.edit) {
            Mode::Edit(self.edit.clone().unwrap_or_default())
        } else {
            Mode::Write
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(vec!["journal"]);
        assert!(args.config.is_none());
        assert!(!args.debug);
        assert!(args.smartcase);
        assert!(!args.no_color);
        assert_eq!(args.log_format, "text");
        assert!(args.text.is_empty());
        assert_eq!(args.mode(), Mode::Write);
    }

    #[test]
    fn test_positional_text() {
        let args = CliArgs::parse_from(vec!["journal", "had", "a", "good", "day"]);
        assert_eq!(args.text, vec!["had", "a", "good", "day"]);
        assert_eq!(args.mode(), Mode::Write);
    }

    #[test]
    fn test_short_flags() {
        let args = CliArgs::parse_from(vec![
            "journal", "-c", "/tmp/rc", "-j", "work", "-s", "coffee",
        ]);
        assert_eq!(args.config.as_deref(), Some("/tmp/rc"));
        assert_eq!(args.journal.as_deref(), Some("work"));
        assert_eq!(args.search.as_deref(), Some("coffee"));
    }

    #[test]
    fn test_smartcase_values() {
        let args = CliArgs::parse_from(vec!["journal", "--smartcase=false"]);
        assert!(!args.smartcase);

        let args = CliArgs::parse_from(vec!["journal", "--smartcase=true"]);
        assert!(args.smartcase);

        let args = CliArgs::parse_from(vec!["journal", "--smartcase"]);
        assert!(args.smartcase);
    }

    #[test]
    fn test_bare_smartcase_leaves_text_alone() {
        let args = CliArgs::parse_from(vec!["journal", "--smartcase", "hello", "world"]);
        assert!(args.smartcase);
        assert_eq!(args.text, vec!["hello", "world"]);
        assert_eq!(args.mode(), Mode::Write);
    }

    #[test]
    fn test_empty_values_do_not_select_a_mode() {
        let args = CliArgs::parse_from(vec!["journal", "-s", "", "--on", "", "note"]);
        assert_eq!(args.mode(), Mode::Write);

        let args = CliArgs::parse_from(vec!["journal", "-e", ""]);
        assert_eq!(args.mode(), Mode::Write);

        let args = CliArgs::parse_from(vec!["journal", "--since", "", "-e", "today"]);
        assert_eq!(args.mode(), Mode::Edit("today".to_string()));
    }

    #[test]
    fn test_mode_precedence() {
        let args = CliArgs::parse_from(vec!["journal", "--edit", "today", "--on", "yesterday"]);
        assert_eq!(args.mode(), Mode::Print);

        let args = CliArgs::parse_from(vec!["journal", "-e", "today", "some", "text"]);
        assert_eq!(args.mode(), Mode::Edit("today".to_string()));

        for flag in ["--since", "--until", "--on", "--search"] {
            let args = CliArgs::parse_from(vec!["journal", flag, "x"]);
            assert_eq!(args.mode(), Mode::Print, "{flag} should select print mode");
        }

        let args = CliArgs::parse_from(vec!["journal", "--date", "yesterday"]);
        assert_eq!(args.mode(), Mode::Write);
    }

    #[test]
    fn test_log_format_validation() {
        let args = CliArgs::parse_from(vec!["journal", "--log-format", "json"]);
        assert_eq!(args.log_format, "json");

        assert!(CliArgs::try_parse_from(vec!["journal", "--log-format", "xml"]).is_err());
    }
}
