//! Verdict table and notification text.
//!
//! Both templates are external contract: downstream consumers parse the
//! notification text, so the strings are reproduced verbatim and must not be
//! reworded.

use reviewwatch_common::error::AppError;
use reviewwatch_common::types::{HomeworkRecord, ReviewStatus};

/// Fixed human-readable verdict for a known status code.
fn verdict(status: ReviewStatus) -> &'static str {
    match status {
        ReviewStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
        ReviewStatus::Reviewing => "Работа взята на проверку ревьюером.",
        ReviewStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
    }
}

/// Map one homework record to its notification message.
///
/// An unknown status code means the remote contract changed; it fails with
/// `UnknownStatus` carrying the raw wire text and never produces a message.
pub fn interpret(record: &HomeworkRecord) -> Result<String, AppError> {
    let status = record
        .status
        .ok_or_else(|| AppError::UnknownStatus(record.raw_status.clone()))?;
    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        record.name,
        verdict(status)
    ))
}

/// Format a recoverable failure as a user-visible report.
pub fn failure_report(error: &AppError) -> String {
    format!("Сбой в работе программы: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(name: &str, raw_status: &str) -> HomeworkRecord {
        HomeworkRecord {
            id: String::new(),
            name: name.to_string(),
            status: ReviewStatus::from_raw(raw_status),
            raw_status: raw_status.to_string(),
        }
    }

    #[test]
    fn test_approved_message_verbatim() {
        let message = interpret(&make_record("hw1", "approved")).unwrap();
        assert_eq!(
            message,
            "Изменился статус проверки работы \"hw1\". \
             Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_reviewing_message_verbatim() {
        let message = interpret(&make_record("hw2", "reviewing")).unwrap();
        assert_eq!(
            message,
            "Изменился статус проверки работы \"hw2\". Работа взята на проверку ревьюером."
        );
    }

    #[test]
    fn test_rejected_message_verbatim() {
        let message = interpret(&make_record("hw3", "rejected")).unwrap();
        assert_eq!(
            message,
            "Изменился статус проверки работы \"hw3\". \
             Работа проверена: у ревьюера есть замечания."
        );
    }

    #[test]
    fn test_unknown_status_never_yields_a_message() {
        for raw in ["graded", "Approved", "done", ""] {
            match interpret(&make_record("hw1", raw)) {
                Err(AppError::UnknownStatus(carried)) => assert_eq!(carried, raw),
                other => panic!("expected UnknownStatus for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_failure_report_carries_the_cause() {
        let report = failure_report(&AppError::HttpStatus(503));
        assert_eq!(
            report,
            "Сбой в работе программы: Status endpoint returned HTTP 503"
        );
    }

    #[test]
    fn test_distinct_failures_produce_distinct_reports() {
        let transport = failure_report(&AppError::Transport("connect timeout".into()));
        let shape = failure_report(&AppError::WrongShape("payload is not a JSON object".into()));
        assert_ne!(transport, shape);
    }
}
