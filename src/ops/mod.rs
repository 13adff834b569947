//! High-level journal operations.
//!
//! Each invocation runs exactly one of these: printing entries, appending a
//! new entry, or opening an entry file in the editor. They take the loaded
//! [`Config`](crate::config::Config) explicitly and report failures as
//! [`AppError`](crate::errors::AppError).

pub mod edit;
pub mod print;
pub mod write;

pub use edit::edit_entry;
pub use print::print_entries;
pub use write::write_entry;
