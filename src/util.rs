//! Formatting and normalization helpers shared across pages.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::America::New_York;

/// Rendering style for [`format_date`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateStyle {
    /// "Mar 5, 2026, 01:30 PM ET"
    Short,
    /// "Thursday, March 5, 2026, 01:30 PM ET"
    Long,
    /// "2 hours ago", falling back to `Short` past seven days
    Relative,
}

/// Format a backend timestamp for display, fixed to Eastern Time.
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates. Missing
/// values render as "N/A" and unparsable ones as "Invalid Date".
pub fn format_date(value: Option<&str>, style: DateStyle) -> String {
    let Some(raw) = value.filter(|v| !v.is_empty()) else {
        return "N/A".to_string();
    };
    let Some(instant) = parse_timestamp(raw) else {
        return "Invalid Date".to_string();
    };

    match style {
        DateStyle::Relative => relative_from(instant, Utc::now()),
        DateStyle::Short => short_eastern(instant),
        DateStyle::Long => format!(
            "{} ET",
            instant
                .with_timezone(&New_York)
                .format("%A, %B %-d, %Y, %I:%M %p")
        ),
    }
}

fn short_eastern(instant: DateTime<Utc>) -> String {
    format!(
        "{} ET",
        instant.with_timezone(&New_York).format("%b %-d, %Y, %I:%M %p")
    )
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // Trend snapshots carry bare dates
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive));
    }
    None
}

/// Relative rendering against an explicit reference instant.
///
/// Anything older than a week reads better as an absolute date.
fn relative_from(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 7 {
        short_eastern(then)
    } else if days > 0 {
        format!("{} day{} ago", days, plural(days))
    } else if hours > 0 {
        format!("{} hour{} ago", hours, plural(hours))
    } else if minutes > 0 {
        format!("{} minute{} ago", minutes, plural(minutes))
    } else {
        "Just now".to_string()
    }
}

fn plural(n: i64) -> &'static str {
    if n > 1 {
        "s"
    } else {
        ""
    }
}

/// Human-readable file size ("2.5 MB").
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = (((bytes as f64).ln() / 1024_f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;

    format!("{} {}", rounded, UNITS[exponent])
}

/// Truncate text to `length` characters, appending an ellipsis.
pub fn truncate(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    let cut: String = text.chars().take(length).collect();
    format!("{}...", cut)
}

/// Thousands-separated rendering of a count.
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Integer percentage of `value` over `total`, 0 when `total` is 0.
pub fn calculate_percentage(value: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    ((value as f64 / total as f64) * 100.0).round() as u64
}

/// Canonical spelling of a lifecycle status as the backend understands it.
///
/// Case-insensitive; runs of whitespace and hyphens collapse to a single
/// underscore, any other punctuation is dropped, and the legacy
/// `pending_approval` spelling maps to `pending`. Filtering a fetched list
/// through this function must match what the server returns when handed
/// the same filter as a query parameter.
pub fn normalize_status(status: &str) -> String {
    let trimmed = status.trim().to_lowercase();
    let mut out = String::with_capacity(trimmed.len());
    let mut in_separator = false;

    for c in trimmed.chars() {
        if c.is_whitespace() || c == '-' {
            if !in_separator {
                out.push('_');
            }
            in_separator = true;
        } else {
            in_separator = false;
            if c.is_ascii_lowercase() || c == '_' {
                out.push(c);
            }
        }
    }

    if out == "pending_approval" {
        "pending".to_string()
    } else {
        out
    }
}

/// Minimal email shape check used by the login form.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !local.contains(char::is_whitespace)
        && !domain.contains(char::is_whitespace)
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn normalize_collapses_case_whitespace_and_hyphens() {
        assert_eq!(normalize_status("Pending"), "pending");
        assert_eq!(normalize_status("  POSTED  "), "posted");
        assert_eq!(normalize_status("pending-approval"), "pending");
        assert_eq!(normalize_status("Pending Approval"), "pending");
        assert_eq!(normalize_status("pending - approval"), "pending");
        assert_eq!(normalize_status("re!jected"), "rejected");
    }

    #[test]
    fn normalize_matches_server_filtering() {
        // A client-side filter over these spellings must select exactly the
        // rows the server would return for status=approved.
        let rows = ["Approved", "approved", "APPROVED ", "rejected", "Posted"];
        let matched: Vec<_> = rows
            .iter()
            .filter(|s| normalize_status(s) == "approved")
            .collect();
        assert_eq!(matched.len(), 3);
    }

    #[test]
    fn relative_ninety_minutes_is_one_hour_ago() {
        let now = utc("2026-03-05T18:30:00Z");
        let then = utc("2026-03-05T17:00:00Z");
        assert_eq!(relative_from(then, now), "1 hour ago");
    }

    #[test]
    fn relative_thresholds() {
        let now = utc("2026-03-05T18:30:00Z");
        assert_eq!(relative_from(utc("2026-03-05T18:29:45Z"), now), "Just now");
        assert_eq!(
            relative_from(utc("2026-03-05T18:25:00Z"), now),
            "5 minutes ago"
        );
        assert_eq!(relative_from(utc("2026-03-03T18:30:00Z"), now), "2 days ago");
        // Older than a week falls back to the absolute short form
        assert_eq!(
            relative_from(utc("2026-02-01T18:30:00Z"), now),
            "Feb 1, 2026, 01:30 PM ET"
        );
    }

    #[test]
    fn short_format_is_timezone_fixed() {
        // 18:30 UTC on a winter date is 13:30 Eastern (EST, UTC-5)
        assert_eq!(
            format_date(Some("2026-03-05T18:30:00Z"), DateStyle::Short),
            "Mar 5, 2026, 01:30 PM ET"
        );
        // Same wall-clock input in summer lands in EDT (UTC-4)
        assert_eq!(
            format_date(Some("2026-07-05T18:30:00Z"), DateStyle::Short),
            "Jul 5, 2026, 02:30 PM ET"
        );
    }

    #[test]
    fn long_format() {
        assert_eq!(
            format_date(Some("2026-03-05T18:30:00Z"), DateStyle::Long),
            "Thursday, March 5, 2026, 01:30 PM ET"
        );
    }

    #[test]
    fn date_only_values_parse() {
        assert_eq!(
            format_date(Some("2026-03-05"), DateStyle::Long),
            "Wednesday, March 4, 2026, 07:00 PM ET"
        );
    }

    #[test]
    fn missing_and_invalid_dates() {
        assert_eq!(format_date(None, DateStyle::Short), "N/A");
        assert_eq!(format_date(Some(""), DateStyle::Short), "N/A");
        assert_eq!(
            format_date(Some("not-a-date"), DateStyle::Short),
            "Invalid Date"
        );
    }

    #[test]
    fn file_sizes() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(2048), "2 KB");
        assert_eq!(format_file_size(1_572_864), "1.5 MB");
    }

    #[test]
    fn truncation() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer caption", 8), "a longer...");
    }

    #[test]
    fn number_grouping() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn percentages() {
        assert_eq!(calculate_percentage(1, 3), 33);
        assert_eq!(calculate_percentage(2, 3), 67);
        assert_eq!(calculate_percentage(5, 0), 0);
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("admin@example.com"));
        assert!(!is_valid_email("admin"));
        assert!(!is_valid_email("admin@nodot"));
        assert!(!is_valid_email("admin @example.com"));
        assert!(!is_valid_email("@example.com"));
    }
}
