//! Utility functions and helpers.

pub mod debounce;
pub mod http;

use chrono::NaiveDate;

/// Format an ISO date (YYYY-MM-DD) for display with a long month name.
///
/// Unparseable input is shown verbatim rather than dropped.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Format a counter compactly: 1.2K above a thousand, 3.4M above a million.
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}
