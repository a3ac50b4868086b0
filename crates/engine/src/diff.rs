//! Value-based change detection over poll results.
//!
//! The fetch window is a fixed 30-day lookback, never an advancing cursor, so
//! the server re-returning already-seen records is the normal case. Change
//! detection therefore rests entirely on comparing record lists by value.

use reviewwatch_common::types::HomeworkRecord;

/// Whether a freshly fetched record list differs from the last-seen one.
///
/// Order matters: the server defines it and index 0 is the acted-upon record,
/// so a reordering is a change.
pub fn records_changed(last: &[HomeworkRecord], fresh: &[HomeworkRecord]) -> bool {
    last != fresh
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewwatch_common::types::ReviewStatus;

    fn make_record(name: &str, status: ReviewStatus) -> HomeworkRecord {
        HomeworkRecord {
            id: String::new(),
            name: name.to_string(),
            status: Some(status),
            raw_status: status.to_string(),
        }
    }

    #[test]
    fn test_identical_lists_are_unchanged() {
        let last = vec![make_record("hw1", ReviewStatus::Reviewing)];
        let fresh = last.clone();
        assert!(!records_changed(&last, &fresh));
    }

    #[test]
    fn test_status_transition_is_a_change() {
        let last = vec![make_record("hw1", ReviewStatus::Reviewing)];
        let fresh = vec![make_record("hw1", ReviewStatus::Approved)];
        assert!(records_changed(&last, &fresh));
    }

    #[test]
    fn test_first_fetch_against_empty_state_is_a_change() {
        let fresh = vec![make_record("hw1", ReviewStatus::Reviewing)];
        assert!(records_changed(&[], &fresh));
    }

    #[test]
    fn test_emptied_list_is_a_change() {
        let last = vec![make_record("hw1", ReviewStatus::Approved)];
        assert!(records_changed(&last, &[]));
    }

    #[test]
    fn test_reordering_is_a_change() {
        let a = make_record("hw1", ReviewStatus::Approved);
        let b = make_record("hw2", ReviewStatus::Reviewing);
        assert!(records_changed(&[a.clone(), b.clone()], &[b, a]));
    }
}
