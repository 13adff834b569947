//! Date-range filtering of entry files.

use super::dates::DateResolver;
use chrono::NaiveDate;

/// Date constraints applied to entry files when viewing.
///
/// `on` overrides the range entirely. Otherwise every bound that is set must
/// hold, and both bounds are inclusive.
///
/// # Examples
///
/// ```
/// use journal::journal_core::EntryFilter;
/// use chrono::NaiveDate;
///
/// let jan = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let filter = EntryFilter {
///     since: Some(jan(3)),
///     until: Some(jan(7)),
///     on: None,
/// };
///
/// assert!(filter.matches(jan(5)));
/// assert!(!filter.matches(jan(1)));
/// assert!(!filter.matches(jan(10)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Earliest date to include.
    pub since: Option<NaiveDate>,
    /// Latest date to include.
    pub until: Option<NaiveDate>,
    /// The only date to include; `since` and `until` are ignored when set.
    pub on: Option<NaiveDate>,
}

impl EntryFilter {
    /// Builds a filter from raw date expressions.
    ///
    /// An expression the resolver cannot understand leaves its bound unset,
    /// so it constrains nothing.
    pub fn from_expressions(
        resolver: &DateResolver,
        since: Option<&str>,
        until: Option<&str>,
        on: Option<&str>,
    ) -> Self {
        let resolve = |expr: Option<&str>| expr.and_then(|expr| resolver.resolve(expr));
        Self {
            since: resolve(since),
            until: resolve(until),
            on: resolve(on),
        }
    }

    /// Returns true if no bound is set.
    pub fn is_unconstrained(&self) -> bool {
        self.since.is_none() && self.until.is_none() && self.on.is_none()
    }

    /// Returns true if an entry file dated `date` passes the filter.
    pub fn matches(&self, date: NaiveDate) -> bool {
        if let Some(on) = self.on {
            return date == on;
        }

        let after_since = self.since.map_or(true, |since| date >= since);
        let before_until = self.until.map_or(true, |until| date <= until);
        after_since && before_until
    }
}
