//! Reusable formatting utilities for CLI output

use chrono::DateTime;

/// Format an RFC 3339 timestamp to a short local date/time string.
///
/// Returns "N/A" when the value is missing or unparseable.
pub fn format_timestamp(value: Option<&str>) -> String {
    let Some(value) = value else {
        return "N/A".to_string();
    };

    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        Err(_) => "N/A".to_string(),
    }
}

/// Format a byte count with binary units.
///
/// # Example output
/// - `512 B`
/// - `1.5 KiB`
/// - `2.0 GiB`
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.1} {}", value, UNITS[unit])
}

/// Format a duration in seconds to a human-readable string.
///
/// Returns "N/A" for missing values.
///
/// # Example output
/// - `2h 15m 30s`
/// - `5m 10s`
/// - `45s`
pub fn format_duration_seconds(seconds: Option<u32>) -> String {
    let Some(secs) = seconds else {
        return "N/A".to_string();
    };

    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, mins, secs)
    } else if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_missing() {
        assert_eq!(format_timestamp(None), "N/A");
        assert_eq!(format_timestamp(Some("not a date")), "N/A");
    }

    #[test]
    fn test_format_timestamp_valid() {
        let formatted = format_timestamp(Some("2025-01-15T10:30:00Z"));
        assert!(formatted.starts_with("2025-01-1"));
        assert_ne!(formatted, "N/A");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1536), "1.5 KiB");
        assert_eq!(format_bytes(2 * 1024 * 1024 * 1024), "2.0 GiB");
    }

    #[test]
    fn test_format_duration_seconds() {
        assert_eq!(format_duration_seconds(None), "N/A");
        assert_eq!(format_duration_seconds(Some(45)), "45s");
        assert_eq!(format_duration_seconds(Some(310)), "5m 10s");
        assert_eq!(format_duration_seconds(Some(8130)), "2h 15m 30s");
    }

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration_seconds(Some(0)), "0s");
    }
}
