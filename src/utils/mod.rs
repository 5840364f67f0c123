//! Utility functions.
//!
//! Date conversions between CLI input, BSON and console output.

use chrono::{NaiveDate, NaiveTime, SecondsFormat, Utc};
use mongodb::bson::DateTime;

/// Midnight UTC at the start of `date`, as a BSON datetime.
pub fn cutoff_from_date(date: NaiveDate) -> DateTime {
    let millis = date.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
    DateTime::from_millis(millis)
}

/// Format a scrape date for display (RFC 3339, UTC).
///
/// Falls back to the BSON representation for dates chrono cannot hold.
pub fn format_scraped_date(date: DateTime) -> String {
    chrono::DateTime::<Utc>::from_timestamp_millis(date.timestamp_millis())
        .map(|d| d.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| date.to_string())
}
