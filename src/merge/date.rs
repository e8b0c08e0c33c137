//! Report date resolution.

use chrono::{Local, NaiveDate};

/// Resolve the date shown in the title block.
///
/// A non-blank `explicit` value is used as given (trimmed); otherwise
/// `today` is formatted as `YYYY-MM-DD`.
pub fn resolve_date(explicit: &str, today: NaiveDate) -> String {
    let explicit = explicit.trim();
    if explicit.is_empty() {
        today.format("%Y-%m-%d").to_string()
    } else {
        explicit.to_string()
    }
}

/// The current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
