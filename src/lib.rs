/*!
# Journal

A command line journaling tool. Each journal is a directory of plain text
files, one per day (`YYYY-MM-DD.txt`), holding timestamped entries separated
by blank lines.

## Core Features

- Append an entry from the command line, or open the editor positioned at the end
- Backdate entries with free-form dates ("yesterday", "3 days ago", "2024-01-05")
- View entries by date range or a single day
- Regex search over entry text with smart-case matching
- Several named journals selected from one TOML config file

## Architecture

- `cli`: Command-line interface handling using clap
- `config`: Config file loading and journal selection
- `errors`: Error handling infrastructure
- `journal_core`: Date resolution, filtering and entry parsing, without I/O
- `journal_io`: Entry file naming, discovery, reading and appending
- `editor`: Launching the external editor
- `ops`: The print, write and edit operations
- `logging`: Tracing subscriber setup

## Usage Example

```rust,no_run
use chrono::Local;
use journal::journal_core::{DateResolver, EntryFilter};
use journal::{ops, Config};

fn main() -> journal::AppResult<()> {
    let config = Config::load(None, None)?;
    config.validate()?;

    let resolver = DateResolver::new(Local::now().naive_local());
    let filter = EntryFilter::from_expressions(&resolver, Some("1 week ago"), None, None);
    ops::print_entries(&mut std::io::stdout(), &config, &filter, Some("coffee"))
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Editor abstraction
pub mod editor;
/// Error types and utilities for error handling
pub mod errors;
/// Core journal logic without I/O
pub mod journal_core;
/// Filesystem operations on entry files
pub mod journal_io;
/// Logging setup
pub mod logging;
/// User-facing operations
pub mod ops;

// Re-export important types for convenience
pub use cli::{CliArgs, Mode};
pub use config::Config;
pub use errors::{AppError, AppResult};
