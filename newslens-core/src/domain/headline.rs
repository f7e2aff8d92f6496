//! Headline records and timestamp coercion.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Timestamp format used by the headline dataset.
pub const HEADLINE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single row of the news dataset.
///
/// `date` is `None` when the source timestamp failed to parse. Such rows are
/// kept (they still count toward publisher statistics) but are excluded from
/// all date-keyed aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlineRecord {
    pub headline: String,
    pub date: Option<NaiveDate>,
    pub stock: String,
    pub publisher: String,
}

/// A scored headline. Derived, never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentRecord {
    pub date: NaiveDate,
    pub stock: String,
    /// Polarity in [-1.0, 1.0].
    pub score: f64,
}

/// Coerce a `YYYY-MM-DD HH:MM:SS` timestamp string to a calendar date.
///
/// Malformed input yields `None` rather than an error — the dataset contains
/// rows with truncated or garbled timestamps and the load must not abort.
/// A bare `YYYY-MM-DD` date (no time component) is also accepted.
pub fn parse_headline_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, HEADLINE_DATE_FORMAT) {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}
