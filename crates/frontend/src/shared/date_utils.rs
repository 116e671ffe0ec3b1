//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application

use chrono::{NaiveDate, NaiveTime, SecondsFormat};

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Convert a date-picker value (YYYY-MM-DD) into an ISO-8601 UTC timestamp
/// at midnight with millisecond precision.
/// Example: "2025-12-31" -> "2025-12-31T00:00:00.000Z"
pub fn date_to_iso_utc(date_str: &str) -> Result<String, chrono::ParseError> {
    let date = NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")?;
    Ok(date
        .and_time(NaiveTime::MIN)
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Millis, true))
}
