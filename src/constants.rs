//! Constants used throughout the application.
//!
//! This module contains the constants shared by the journal modules, organized
//! into logical groups. Keeping them in one place makes the on-disk format and
//! the defaults easy to find and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "journal";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Command line journaling application";

// Editor
/// Default command for the editor if `EDITOR` is not set.
pub const DEFAULT_EDITOR_COMMAND: &str = "vim";
/// Argument that makes vim and neovim open with the cursor appended at the end of the file.
pub const VIM_APPEND_AT_END_ARG: &str = "+normal Ga";
/// Argument that makes vi open on the last line of the file.
pub const VI_LAST_LINE_ARG: &str = "+";

// Configuration Keys & Environment Variables
/// Standard environment variable for specifying the default editor.
pub const ENV_VAR_EDITOR: &str = "EDITOR";
/// Environment variable that disables colored output when set.
pub const ENV_VAR_NO_COLOR: &str = "NO_COLOR";
/// Default configuration file, relative to the home directory.
pub const DEFAULT_CONFIG_FILE: &str = "~/.journalrc";
/// Fallback configuration file tried when the default one is absent.
pub const FALLBACK_CONFIG_FILE: &str = "~/.journalrc.toml";
/// Table holding the journal selection in the config file.
pub const CONFIG_JOURNAL_TABLE: &str = "journal";

// File System Parameters
/// File extension for journal entry files.
pub const ENTRY_FILE_EXTENSION: &str = "txt";
/// Regex extracting the `YYYY-MM-DD` token from an entry file name.
pub const ENTRY_FILE_DATE_PATTERN: &str = r"(\d+-\d+-\d+)\.txt$";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD), also used for entry file names.
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Format of the timestamp line that opens every entry, e.g. `Fri 01/05/24 09:30:00`.
pub const ENTRY_TIMESTAMP_FORMAT: &str = "%a %m/%d/%y %H:%M:%S";
/// Regex matching an entry timestamp line.
pub const ENTRY_TIMESTAMP_PATTERN: &str = r"\w+ \d+/\d+/\d+ \d+:\d+:\d+";
/// Marker written before entry text supplied on the command line.
pub const ENTRY_TEXT_MARKER: &str = "- ";

// Logging Configuration
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Log level used when `--debug` is passed.
pub const DEBUG_LOG_LEVEL: &str = "debug";
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "journal";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
