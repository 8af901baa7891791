//! # Date Codec
//!
//! Conversions between calendar dates and the `YYYY-MM-DD` strings the
//! expense API exchanges.
//!
//! ## Responsibilities:
//! - Format a calendar date as a zero-padded ISO date string
//! - Parse an ISO date string back into a calendar date
//! - Provide "today" as a local calendar date with no time-of-day
//!
//! ## Purpose:
//! The wire format carries plain calendar dates, never timestamps. Both
//! directions read only calendar fields (`chrono::NaiveDate` has no
//! timezone), so a round trip through this module never shifts a date to
//! the adjacent day no matter what offset the host process runs in. A
//! UTC-timestamp-based formatter would get this wrong near midnight.

use chrono::NaiveDate;

/// Format a calendar date as `YYYY-MM-DD`, zero-padded.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// No timezone adjustment is applied; the three numeric components are
/// taken as-is.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
}

/// Current local calendar date, time-of-day stripped.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
