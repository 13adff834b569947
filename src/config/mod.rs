//! Configuration management for the journal application.
//!
//! The journal configuration lives in a TOML file, `~/.journalrc` by default
//! (`~/.journalrc.toml` is tried when the former does not exist):
//!
//! ```toml
//! [journal]
//! default = "personal"
//!
//! [personal]
//! location = "~/journals/personal"
//!
//! [work]
//! location = "$HOME/work/journal"
//! ```
//!
//! `[journal].default` names the journal used when `--journal` is not given.
//! Every other table declares a journal by name with its `location`, which
//! may use `~` and environment variables.
//!
//! # Environment Variables
//!
//! - `EDITOR`: Editor to use for journal entries (defaults to "vim")
//! - `NO_COLOR`: Disables timestamp highlighting when set
//! - `HOME`: Used for expanding `~` in paths

use crate::constants::{
    CONFIG_JOURNAL_TABLE, DEFAULT_CONFIG_FILE, DEFAULT_EDITOR_COMMAND, ENV_VAR_EDITOR,
    ENV_VAR_NO_COLOR, FALLBACK_CONFIG_FILE,
};
use crate::errors::{AppResult, ConfigError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// The `[journal]` table: the default selection, and the location of a
/// journal that happens to be named "journal".
#[derive(Debug, Default, Deserialize)]
pub struct JournalSelection {
    pub default: Option<String>,
    pub location: Option<String>,
}

/// A named journal table.
#[derive(Debug, Default, Deserialize)]
pub struct JournalDefinition {
    pub location: Option<String>,
}

/// The parsed contents of a journal config file.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub journal: JournalSelection,

    #[serde(flatten)]
    pub journals: BTreeMap<String, JournalDefinition>,
}

impl ConfigFile {
    /// Parses config file contents.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// The unexpanded `location` configured for journal `name`.
    pub fn location_of(&self, name: &str) -> Option<&str> {
        if name == CONFIG_JOURNAL_TABLE {
            return self.journal.location.as_deref();
        }
        self.journals
            .get(name)
            .and_then(|journal| journal.location.as_deref())
    }

    /// Picks the active journal: the override if given, else the configured
    /// default. Returns its name and expanded directory.
    pub fn select(&self, journal_override: Option<&str>) -> Result<(String, PathBuf), ConfigError> {
        let name = journal_override
            .map(str::to_string)
            .or_else(|| self.journal.default.clone())
            .ok_or(ConfigError::NoDefaultJournal)?;

        let location = self
            .location_of(&name)
            .ok_or_else(|| ConfigError::UnknownJournal { name: name.clone() })?;

        Ok((name, expand_path(location)?))
    }
}

/// Expands `~` and environment variables in `raw`.
pub fn expand_path(raw: &str) -> Result<PathBuf, ConfigError> {
    let expanded = shellexpand::full(raw).map_err(|e| ConfigError::Expansion(e.to_string()))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

/// Configuration for one journal invocation.
///
/// Built once at startup and passed explicitly to every operation.
///
/// # Examples
///
/// ```
/// use journal::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     journal_dir: PathBuf::from("/path/to/journal"),
///     ..Config::default()
/// };
/// assert_eq!(config.editor, "vim");
/// assert!(config.smartcase);
/// ```
pub struct Config {
    /// The config file the journal was selected from.
    pub config_path: PathBuf,

    /// Name of the selected journal.
    pub journal_name: String,

    /// Directory holding the selected journal's entry files.
    pub journal_dir: PathBuf,

    /// Editor command, possibly with arguments (e.g. `code -w`).
    ///
    /// Loaded from `EDITOR`, defaulting to "vim".
    pub editor: String,

    /// Whether searches use smart-case matching.
    pub smartcase: bool,

    /// Whether timestamps are highlighted when printing.
    pub color: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("config_path", &"[REDACTED_PATH]")
            .field("journal_name", &self.journal_name)
            .field("journal_dir", &"[REDACTED_PATH]")
            .field("editor", &self.editor)
            .field("smartcase", &self.smartcase)
            .field("color", &self.color)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            config_path: PathBuf::new(),
            journal_name: String::new(),
            journal_dir: PathBuf::new(),
            editor: DEFAULT_EDITOR_COMMAND.to_string(),
            smartcase: true,
            color: true,
        }
    }
}

impl Config {
    /// Loads the config file and selects a journal.
    ///
    /// # Arguments
    ///
    /// * `config_override` - Path given with `--config`; the default locations
    ///   are searched when `None`
    /// * `journal_override` - Journal name given with `--journal`
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with:
    /// - `ConfigError::NotFound` if no config file exists
    /// - `ConfigError::Unreadable` if the file cannot be read
    /// - `ConfigError::Invalid` if the file is not valid TOML
    /// - `ConfigError::NoDefaultJournal` / `UnknownJournal` if no usable journal is selected
    pub fn load(config_override: Option<&str>, journal_override: Option<&str>) -> AppResult<Self> {
        let config_path = Self::locate_config_file(config_override)?;
        debug!(path = %config_path.display(), "reading config");

        let content = fs::read_to_string(&config_path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: config_path.clone(),
                }
            } else {
                ConfigError::Unreadable {
                    path: config_path.clone(),
                    source,
                }
            }
        })?;

        let file = ConfigFile::parse(&content).map_err(|source| ConfigError::Invalid {
            path: config_path.clone(),
            source,
        })?;

        let (journal_name, journal_dir) = file.select(journal_override)?;
        debug!(name = %journal_name, location = %journal_dir.display(), "journal selected");

        let editor = env::var(ENV_VAR_EDITOR)
            .ok()
            .filter(|editor| !editor.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EDITOR_COMMAND.to_string());

        Ok(Config {
            config_path,
            journal_name,
            journal_dir,
            editor,
            smartcase: true,
            color: env::var_os(ENV_VAR_NO_COLOR).is_none(),
        })
    }

    /// Resolves which config file to read.
    ///
    /// An explicit path is used as given (after expansion). Otherwise the
    /// default file is preferred, then the fallback; if neither exists the
    /// default path is returned so the read reports it as not found.
    fn locate_config_file(config_override: Option<&str>) -> Result<PathBuf, ConfigError> {
        if let Some(path) = config_override {
            return expand_path(path);
        }

        let default = expand_path(DEFAULT_CONFIG_FILE)?;
        if default.exists() {
            return Ok(default);
        }

        let fallback = expand_path(FALLBACK_CONFIG_FILE)?;
        if fallback.exists() {
            return Ok(fallback);
        }

        Ok(default)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if:
    /// - the journal directory path is empty or relative
    /// - the editor command is empty
    pub fn validate(&self) -> AppResult<()> {
        if self.journal_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation("Journal directory path is empty".to_string()).into());
        }

        if !self.journal_dir.is_absolute() {
            return Err(ConfigError::Validation(format!(
                "Journal directory must be an absolute path: {}",
                self.journal_dir.display()
            ))
            .into());
        }

        if self.editor.trim().is_empty() {
            return Err(ConfigError::Validation("Editor command is empty".to_string()).into());
        }

        Ok(())
    }
}
