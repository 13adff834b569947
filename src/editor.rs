//! Editor abstraction for opening journal files.
//!
//! This module provides an abstraction for opening files in an external
//! editor, so the write and edit operations can be tested with a mock editor
//! instead of an interactive process.

use crate::constants::{VIM_APPEND_AT_END_ARG, VI_LAST_LINE_ARG};
use crate::errors::{AppResult, EditorError};
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Where the editor should place the cursor when the file opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPosition {
    /// Whatever the editor does by default.
    Default,
    /// At the end of the file, ready to append.
    End,
}

/// Trait defining the interface for an editor component.
///
/// # Examples
///
/// ```
/// use journal::editor::{CursorPosition, Editor};
/// use journal::errors::AppResult;
/// use std::path::Path;
///
/// struct DummyEditor;
///
/// impl Editor for DummyEditor {
///     fn open(&self, path: &Path, _position: CursorPosition) -> AppResult<()> {
///         println!("Would open {}", path.display());
///         Ok(())
///     }
/// }
///
/// DummyEditor.open(Path::new("2024-01-05.txt"), CursorPosition::End).unwrap();
/// ```
pub trait Editor {
    /// Opens `path` and blocks until the user is done with it.
    fn open(&self, path: &Path, position: CursorPosition) -> AppResult<()>;
}

/// Launches an external editor process attached to the invoking terminal.
///
/// The command string is split on whitespace into a program and its
/// arguments, so values like `code -w` work. No shell is involved.
pub struct SystemEditor {
    /// The command used to open files (e.g. "vim", "nano", "code -w").
    pub editor_cmd: String,
}

impl SystemEditor {
    pub fn new(editor_cmd: impl Into<String>) -> Self {
        Self {
            editor_cmd: editor_cmd.into(),
        }
    }

    /// Builds the program and argument list for opening `path`.
    pub fn command_line(&self, path: &Path, position: CursorPosition) -> AppResult<(String, Vec<String>)> {
        let mut words = self.editor_cmd.split_whitespace();
        let program = words.next().ok_or(EditorError::EmptyCommand)?.to_string();
        let mut args: Vec<String> = words.map(str::to_string).collect();

        if position == CursorPosition::End {
            let name = Path::new(&program)
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or(&program);
            match name {
                "vim" | "nvim" | "gvim" | "mvim" => args.push(VIM_APPEND_AT_END_ARG.to_string()),
                "vi" => args.push(VI_LAST_LINE_ARG.to_string()),
                _ => {}
            }
        }

        args.push(path.to_string_lossy().into_owned());
        Ok((program, args))
    }
}

impl Editor for SystemEditor {
    /// Runs the editor with inherited standard streams and waits for it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Editor` with:
    /// - `EditorError::EmptyCommand` if the command string is blank
    /// - `EditorError::CommandNotFound` if the program doesn't exist
    /// - `EditorError::PermissionDenied` if it cannot be executed
    /// - `EditorError::ExecutionFailed` for other I/O errors
    /// - `EditorError::NonZeroExit` if it exits unsuccessfully or is killed
    fn open(&self, path: &Path, position: CursorPosition) -> AppResult<()> {
        let (program, args) = self.command_line(path, position)?;
        debug!(editor = %program, ?args, "launching editor");

        let status = Command::new(&program)
            .args(&args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => EditorError::CommandNotFound {
                    command: program.clone(),
                    source,
                },
                io::ErrorKind::PermissionDenied => EditorError::PermissionDenied {
                    command: program.clone(),
                    source,
                },
                _ => EditorError::ExecutionFailed {
                    command: program.clone(),
                    source,
                },
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(EditorError::NonZeroExit {
                command: program,
                status_code: status.code().unwrap_or(-1),
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use std::path::PathBuf;

    #[test]
    fn test_command_line_default_position() {
        let editor = SystemEditor::new("vim");
        let (program, args) = editor
            .command_line(Path::new("/j/2024-01-05.txt"), CursorPosition::Default)
            .unwrap();
        assert_eq!(program, "vim");
        assert_eq!(args, vec!["/j/2024-01-05.txt".to_string()]);
    }

    #[test]
    fn test_command_line_vim_appends_at_end() {
        let editor = SystemEditor::new("/usr/bin/nvim");
        let (program, args) = editor
            .command_line(Path::new("/j/2024-01-05.txt"), CursorPosition::End)
            .unwrap();
        assert_eq!(program, "/usr/bin/nvim");
        assert_eq!(args, vec!["+normal Ga".to_string(), "/j/2024-01-05.txt".to_string()]);

        let (_, args) = SystemEditor::new("vi")
            .command_line(Path::new("f.txt"), CursorPosition::End)
            .unwrap();
        assert_eq!(args, vec!["+".to_string(), "f.txt".to_string()]);
    }

    #[test]
    fn test_command_line_with_arguments() {
        let editor = SystemEditor::new("code  -w");
        let (program, args) = editor
            .command_line(Path::new("/j/a b/2024-01-05.txt"), CursorPosition::End)
            .unwrap();
        assert_eq!(program, "code");
        assert_eq!(args, vec!["-w".to_string(), "/j/a b/2024-01-05.txt".to_string()]);
    }

    #[test]
    fn test_empty_command() {
        let result = SystemEditor::new("   ").open(Path::new("f.txt"), CursorPosition::Default);
        assert!(matches!(result, Err(AppError::Editor(EditorError::EmptyCommand))));
    }

    #[test]
    fn test_missing_editor_is_reported() {
        let editor = SystemEditor::new("definitely-not-an-installed-editor-42");
        match editor.open(&PathBuf::from("f.txt"), CursorPosition::Default) {
            Err(AppError::Editor(EditorError::CommandNotFound { command, .. })) => {
                assert_eq!(command, "definitely-not-an-installed-editor-42");
            }
            other => panic!("Expected CommandNotFound, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_and_failing_editors() {
        assert!(SystemEditor::new("true")
            .open(Path::new("f.txt"), CursorPosition::Default)
            .is_ok());

        match SystemEditor::new("false").open(Path::new("f.txt"), CursorPosition::Default) {
            Err(AppError::Editor(EditorError::NonZeroExit { status_code, .. })) => {
                assert_eq!(status_code, 1)
            }
            other => panic!("Expected NonZeroExit, got {:?}", other),
        }
    }
}
