//! Final status and output line
//!
//! The status line is `Status <Ok|Warning|Critical|Unknown>[, <message>]`,
//! followed by `|` and the space-separated performance tokens when any
//! metrics were recorded.

use super::Status;
use crate::perf::MetricRecord;
use core::fmt::Write;

/// What a plugin prints and how it exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub status: Status,
    pub line: String,
    pub exit_code: i32,
}

impl Report {
    fn new(status: Status, line: String) -> Self {
        Self {
            status,
            line,
            exit_code: status.exit_code(),
        }
    }
}

/// The highest state among `records`, or [`Status::Ok`] when there are none.
#[must_use]
pub fn overall_status(records: &[MetricRecord]) -> Status {
    records.iter().map(|r| r.state).max().unwrap_or_default()
}

/// Build the report for a completed run.
#[must_use]
pub fn finalize(records: &[MetricRecord], message: Option<&str>) -> Report {
    let status = overall_status(records);
    let mut line = status_line(status, message);

    if !records.is_empty() {
        line.push('|');
        for (i, record) in records.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            let _ = write!(line, "{record}");
        }
    }

    Report::new(status, line)
}

/// Build the report for a run that had to be abandoned.
///
/// Always [`Status::Unknown`] with exit code 3, whatever was recorded before.
#[must_use]
pub fn unknown(message: &str) -> Report {
    let message = (!message.is_empty()).then_some(message);
    Report::new(Status::Unknown, status_line(Status::Unknown, message))
}

/// Make free text safe to place before the performance data separator.
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    message.replace('|', " ")
}

fn status_line(status: Status, message: Option<&str>) -> String {
    match message {
        Some(message) => format!("Status {status}, {}", sanitize_message(message)),
        None => format!("Status {status}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perf::Scale;

    fn record(name: &str, value: f64, state: Status) -> MetricRecord {
        MetricRecord {
            name: name.to_string(),
            value,
            min: None,
            max: None,
            scale: None,
            slot: 1,
            state,
            matched_raw_warning: None,
            matched_raw_critical: None,
        }
    }

    #[test]
    fn test_no_records_is_ok() {
        let report = finalize(&[], None);
        assert_eq!(report.status, Status::Ok);
        assert_eq!(report.exit_code, 0);
        assert_eq!(report.line, "Status Ok");
    }

    #[test]
    fn test_highest_state_wins() {
        let records = [record("a", 1.0, Status::Warning), record("b", 2.0, Status::Critical), record("c", 3.0, Status::Ok)];
        let report = finalize(&records, None);
        assert_eq!(report.status, Status::Critical);
        assert_eq!(report.exit_code, 2);
    }

    #[test]
    fn test_line_with_message_and_perfdata() {
        let disk = MetricRecord {
            scale: Some(Scale::Percent),
            min: Some(0.0),
            max: Some(100.0),
            matched_raw_warning: Some("80".to_string()),
            ..record("disk", 85.0, Status::Warning)
        };
        let records = [record("load", 0.5, Status::Ok), disk];

        let report = finalize(&records, Some("disk is filling up"));
        insta::assert_snapshot!(report.line, @"Status Warning, disk is filling up|load=0.5;;;; disk=85%;80;;0;100");
        assert_eq!(report.exit_code, 1);
    }

    #[test]
    fn test_pipes_in_message_are_replaced() {
        let report = finalize(&[record("a", 1.0, Status::Ok)], Some("a|b||c"));
        assert_eq!(report.line, "Status Ok, a b  c|a=1;;;;");
    }

    #[test]
    fn test_unknown_ignores_records() {
        let report = unknown("Performance measures must be numeric!");
        assert_eq!(report.status, Status::Unknown);
        assert_eq!(report.exit_code, 3);
        assert_eq!(report.line, "Status Unknown, Performance measures must be numeric!");
    }

    #[test]
    fn test_unknown_without_message() {
        assert_eq!(unknown("").line, "Status Unknown");
    }

    #[test]
    fn test_unknown_message_is_sanitized() {
        assert_eq!(unknown("x|y").line, "Status Unknown, x y");
    }
}
