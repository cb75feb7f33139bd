//! Helpers for timestamps and diagnostic text.

use chrono::{DateTime, Local, Utc};

const MAX_BODY_SNIPPET: usize = 2000;

/// Parse a timestamp filter into unix seconds.
///
/// Accepts plain unix seconds (`1700000000`) or RFC 3339 (`2024-01-01T00:00:00Z`).
pub fn parse_timestamp(s: &str) -> Result<i64, String> {
    let s = s.trim();
    if let Ok(secs) = s.parse::<i64>() {
        return Ok(secs);
    }
    parse_time(s)
        .map(|dt| dt.timestamp())
        .map_err(|_| format!("Invalid timestamp (expected unix seconds or RFC 3339): {}", s))
}

/// Parse RFC 3339 time string; a missing offset is read as UTC.
pub fn parse_time(s: &str) -> Result<DateTime<Utc>, String> {
    let s = s.trim();
    let parsed = DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_rfc3339(&format!("{}Z", s)))
        .map_err(|e| e.to_string())?;
    Ok(parsed.with_timezone(&Utc))
}

/// Format an RFC 3339 timestamp for display, in UTC when `use_utc` is set and
/// in the local timezone otherwise.
/// On parse failure returns `None`.
pub fn format_timestamp_display(ts: &str, use_utc: bool) -> Option<String> {
    let dt = parse_time(ts).ok()?;
    Some(if use_utc {
        dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    } else {
        dt.with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S %:z")
            .to_string()
    })
}

/// Cap a response body for error messages and logs.
pub(crate) fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_BODY_SNIPPET {
        return body.to_string();
    }
    let mut end = MAX_BODY_SNIPPET;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(parse_timestamp("1700000000").unwrap(), 1_700_000_000);
        assert_eq!(parse_timestamp("2024-01-01T00:00:00Z").unwrap(), 1_704_067_200);
        assert_eq!(
            parse_timestamp("2024-01-01T02:00:00+02:00").unwrap(),
            1_704_067_200
        );
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_format_timestamp_display_utc() {
        assert_eq!(
            format_timestamp_display("2013-04-30T13:12:51Z", true).as_deref(),
            Some("2013-04-30 13:12:51 UTC")
        );
        assert!(format_timestamp_display("production", true).is_none());
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("short"), "short");
        let long = "é".repeat(MAX_BODY_SNIPPET);
        let out = truncate_body(&long);
        assert!(out.ends_with("...[truncated]"));
        assert!(out.len() <= MAX_BODY_SNIPPET + "...[truncated]".len());
    }
}
