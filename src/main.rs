/*!
# Journal - A Command Line Journaling Tool

This file contains the main application flow: it parses arguments, sets up
logging, loads the configuration and dispatches to exactly one operation.

## Usage

```
journal [OPTIONS] [TEXT]...

Options:
  -c, --config <CONFIG>     Config file to use (default is ~/.journalrc)
      --debug               Enable debug output
  -j, --journal <JOURNAL>   Journal to use
      --date <DATE>         Date for the new entry
      --since <SINCE>       Show entries on or after this date
      --until <UNTIL>       Show entries on or before this date
      --on <ON>             Show entries on this date only
  -s, --search <SEARCH>     Show entries whose text matches this regular expression
      --smartcase[=<BOOL>]  Lowercase search terms ignore case [default: true]
  -e, --edit <EDIT>         Open the entry file for this date in the editor
      --no-color            Disable timestamp highlighting
      --log-format <FORMAT> Log output format [default: text]
```

## Configuration

- `~/.journalrc` (or `~/.journalrc.toml`): journals and the default journal
- `EDITOR`: the editor to use (defaults to "vim")
- `NO_COLOR`: disables timestamp highlighting
- `RUST_LOG`: overrides the log filter
*/

use chrono::Local;
use clap::Parser;
use journal::cli::{CliArgs, Mode};
use journal::config::Config;
use journal::constants::{TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME};
use journal::editor::SystemEditor;
use journal::errors::AppResult;
use journal::journal_core::{DateResolver, EntryFilter};
use journal::{logging, ops};
use std::process::ExitCode;
use tracing::{debug, info, info_span};
use uuid::Uuid;

fn main() -> ExitCode {
    // Obtain the current time once so every date in this run agrees.
    let now = Local::now().naive_local();

    let args = CliArgs::parse();
    logging::init(args.debug, &args.log_format);

    let correlation_id = Uuid::new_v4();
    let span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = span.enter();

    match run(args, now) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = %e, "invocation failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs, now: chrono::NaiveDateTime) -> AppResult<()> {
    debug!(?args, "parsed arguments");

    let mut config = Config::load(args.config.as_deref(), args.journal.as_deref())?;
    config.smartcase = args.smartcase;
    if args.no_color {
        config.color = false;
    }
    config.validate()?;
    debug!(?config, "configuration loaded");

    let resolver = DateResolver::new(now);
    let editor = SystemEditor::new(config.editor.clone());

    match args.mode() {
        Mode::Print => {
            let filter = EntryFilter::from_expressions(
                &resolver,
                args.since.as_deref(),
                args.until.as_deref(),
                args.on.as_deref(),
            );
            debug!(?filter, "printing entries");
            let stdout = std::io::stdout();
            let search = args.search.as_deref().filter(|term| !term.is_empty());
            ops::print_entries(&mut stdout.lock(), &config, &filter, search)?;
        }
        Mode::Edit(expr) => {
            ops::edit_entry(&config, &resolver, &expr, &editor)?;
        }
        Mode::Write => {
            ops::write_entry(&config, &resolver, args.date.as_deref(), &args.text, &editor)?;
        }
    }

    info!("invocation complete");
    Ok(())
}
