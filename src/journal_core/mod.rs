//! Core journal functionality without I/O operations.
//!
//! This module contains the pure logic of the journal: resolving free-form
//! date expressions, deciding which entry files a date filter selects, and
//! splitting file content into searchable entries. Nothing here touches the
//! filesystem or spawns processes.

pub mod dates;
pub mod entries;
pub mod filter;

pub use dates::{DateParser, DateResolver, NaturalDateParser, StrictDateParser};
pub use entries::{Entry, EntryParser, Highlighter, SearchMatcher};
pub use filter::EntryFilter;
