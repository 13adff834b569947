//! Error handling utilities for the journal application.
//!
//! This module provides the central error type `AppError` covering every
//! condition that can end an invocation, plus the convenience alias
//! `AppResult`. Conditions that only skip a single file while viewing are not
//! errors; they are logged and swallowed at the call site.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons the journal configuration could not be turned into a usable `Config`.
///
/// Each variant is fatal at startup and carries its own message, so the user
/// can tell a missing file apart from one that exists but cannot be used.
///
/// # Examples
///
/// ```
/// use journal::errors::ConfigError;
/// use std::path::PathBuf;
///
/// let error = ConfigError::NotFound {
///     path: PathBuf::from("/home/me/.journalrc"),
/// };
/// assert!(format!("{}", error).contains("config not found"));
/// ```
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config file exists at the requested or default location.
    #[error("config not found: {path}")]
    NotFound {
        /// The path that was looked up
        path: PathBuf,
    },

    /// The config file exists but reading it failed.
    #[error("config could not be read in from {path}: {source}")]
    Unreadable {
        /// The config file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The config file was read but is not valid TOML for a journal config.
    #[error("config could not be read in from {path}: {source}")]
    Invalid {
        /// The config file path
        path: PathBuf,
        /// The TOML parse error
        #[source]
        source: toml::de::Error,
    },

    /// Neither `--journal` nor `journal.default` named a journal.
    #[error("no journal selected: set `default` under [journal] in the config or pass --journal")]
    NoDefaultJournal,

    /// The selected journal has no `location` in the config.
    #[error("journal '{name}' has no location configured")]
    UnknownJournal {
        /// The selected journal name
        name: String,
    },

    /// Expanding `~` or an environment variable in a path failed.
    #[error("failed to expand path: {0}")]
    Expansion(String),

    /// The loaded configuration failed validation.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

/// Represents specific error cases that can occur when interacting with external editors.
///
/// # Examples
///
/// ```
/// use journal::errors::EditorError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "command not found");
/// let error = EditorError::CommandNotFound {
///     command: "vim".to_string(),
///     source: io_error,
/// };
///
/// assert!(format!("{}", error).contains("could not find"));
/// assert!(format!("{}", error).contains("vim"));
/// ```
#[derive(Debug, Error)]
pub enum EditorError {
    /// The editor command string was empty.
    #[error("Editor command is empty. Set the EDITOR environment variable to your preferred editor.")]
    EmptyCommand,

    /// Error when the specified editor command cannot be found.
    #[error("could not find an appropriate editor '{command}': {source}. Please check that the editor is installed and available in your PATH.")]
    CommandNotFound {
        /// The editor command that was not found
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when permission is denied to execute the editor command.
    #[error("Permission denied when trying to execute editor '{command}': {source}")]
    PermissionDenied {
        /// The editor command that had permission denied
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when the editor command fails to execute due to other I/O errors.
    #[error("Failed to execute editor '{command}': {source}")]
    ExecutionFailed {
        /// The editor command that failed to execute
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when the editor exits with a non-zero status code or is killed by a signal.
    ///
    /// `status_code` is -1 when the editor was terminated by a signal.
    #[error("Editor '{command}' exited with non-zero status code: {status_code}")]
    NonZeroExit {
        /// The editor command that exited with a non-zero status
        command: String,
        /// The exit status code
        status_code: i32,
    },
}

/// Represents every error that can terminate a journal invocation.
///
/// # Examples
///
/// Converting from an IO error:
/// ```
/// use journal::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors in journal entry logic.
    #[error("Journal logic error: {0}")]
    Journal(String),

    /// Errors when interacting with the text editor.
    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),

    /// The search term is not a valid regular expression.
    #[error("Invalid search term: {0}")]
    Search(#[from] regex::Error),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;
