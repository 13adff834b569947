//! Free-form date resolution.
//!
//! A [`DateResolver`] turns expressions such as `today`, `2 days ago` or
//! `2024-01-05` into a calendar date. It tries an ordered chain of
//! [`DateParser`] strategies:
//!
//! 1. [`StrictDateParser`] for common absolute formats,
//! 2. [`NaturalDateParser`] for English relative phrases (via `chrono-english`),
//!    evaluated against a fixed "now" reference.
//!
//! When every strategy fails the resolver returns `None`, the unresolved
//! sentinel. Callers must treat it as "no date constraint" when filtering and
//! as "today" when writing or editing; an ambiguous expression never aborts an
//! invocation.

use crate::constants::DATE_FORMAT_ISO;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_english::{parse_date_string, Dialect};
use tracing::{debug, warn};

/// A single strategy for interpreting a date expression.
pub trait DateParser {
    /// Short name used in debug logs.
    fn name(&self) -> &'static str;

    /// Interprets `input` relative to `now`, returning `None` when the
    /// expression is not understood by this strategy.
    fn parse(&self, input: &str, now: NaiveDateTime) -> Option<NaiveDate>;
}

/// Absolute date formats accepted by [`StrictDateParser`], tried in order.
const DATE_FORMATS: &[&str] = &[
    DATE_FORMAT_ISO,
    "%Y/%m/%d",
    "%Y%m%d",
    "%m/%d/%y",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Date-time formats whose time of day is discarded.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parses common absolute date and date-time formats.
#[derive(Debug, Default)]
pub struct StrictDateParser;

impl DateParser for StrictDateParser {
    fn name(&self) -> &'static str {
        "strict"
    }

    fn parse(&self, input: &str, _now: NaiveDateTime) -> Option<NaiveDate> {
        let input = input.trim();

        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
            .or_else(|| {
                DATETIME_FORMATS
                    .iter()
                    .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
                    .map(|datetime| datetime.date())
            })
            .or_else(|| {
                DateTime::parse_from_rfc3339(input)
                    .ok()
                    .map(|datetime| datetime.date_naive())
            })
    }
}

/// Parses English relative date phrases with `chrono-english`.
///
/// Its grammar covers phrases such as `now`, `today`, `yesterday`,
/// `tomorrow`, `2 days ago`, `1 week ago`, `friday`, `last friday` and
/// `next friday`. Input is trimmed, lowercased and has its whitespace
/// collapsed first; `tonight` is read as `today`. Only the calendar date of
/// the result is kept.
#[derive(Debug, Default)]
pub struct NaturalDateParser;

impl NaturalDateParser {
    pub fn new() -> Self {
        Self
    }
}

impl DateParser for NaturalDateParser {
    fn name(&self) -> &'static str {
        "natural"
    }

    fn parse(&self, input: &str, now: NaiveDateTime) -> Option<NaiveDate> {
        let phrase = input
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        let phrase = match phrase.as_str() {
            "" => return None,
            "tonight" => "today",
            other => other,
        };

        // Naive local time stands in as UTC; only whole days are kept.
        let reference = Utc.from_utc_datetime(&now);
        match parse_date_string(phrase, reference, Dialect::Us) {
            Ok(resolved) => Some(resolved.date_naive()),
            Err(e) => {
                debug!(input = phrase, error = ?e, "natural date parse failed");
                None
            }
        }
    }
}

/// Resolves free-form date expressions through an ordered chain of parsers.
///
/// The chain is strict formats first, then natural-language phrases. The
/// first strategy that understands the input wins. If none does, `resolve`
/// returns `None` and the expression imposes no constraint.
///
/// # Examples
///
/// ```
/// use journal::journal_core::dates::DateResolver;
/// use chrono::NaiveDate;
///
/// let now = NaiveDate::from_ymd_opt(2024, 1, 10)
///     .unwrap()
///     .and_hms_opt(15, 45, 0)
///     .unwrap();
/// let resolver = DateResolver::new(now);
///
/// assert_eq!(resolver.resolve("2024-01-05"), NaiveDate::from_ymd_opt(2024, 1, 5));
/// assert_eq!(resolver.resolve("2 days ago"), NaiveDate::from_ymd_opt(2024, 1, 8));
/// assert_eq!(resolver.resolve("whenever"), None);
/// ```
pub struct DateResolver {
    now: NaiveDateTime,
    parsers: Vec<Box<dyn DateParser>>,
}

impl DateResolver {
    /// Creates a resolver using the default parser chain and `now` as the reference instant.
    pub fn new(now: NaiveDateTime) -> Self {
        Self::with_parsers(now, Self::default_chain())
    }

    /// Creates a resolver with a custom parser chain.
    pub fn with_parsers(now: NaiveDateTime, parsers: Vec<Box<dyn DateParser>>) -> Self {
        Self { now, parsers }
    }

    /// The standard chain: strict formats, then natural-language phrases.
    pub fn default_chain() -> Vec<Box<dyn DateParser>> {
        vec![Box::new(StrictDateParser), Box::new(NaturalDateParser::new())]
    }

    /// The reference instant relative expressions are evaluated against.
    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// The calendar date of the reference instant.
    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }

    /// Resolves `input` to a date, or `None` if no parser understands it.
    pub fn resolve(&self, input: &str) -> Option<NaiveDate> {
        for parser in &self.parsers {
            if let Some(date) = parser.parse(input, self.now) {
                debug!(input, parser = parser.name(), %date, "resolved date expression");
                return Some(date);
            }
        }

        warn!(input, "could not understand date expression; ignoring it");
        None
    }

    /// Resolves an optional expression, falling back to today when it is
    /// absent or unresolved.
    pub fn resolve_or_today(&self, input: Option<&str>) -> NaiveDate {
        input
            .and_then(|expr| self.resolve(expr))
            .unwrap_or_else(|| self.today())
    }
}
