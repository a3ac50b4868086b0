use serde::{Deserialize, Serialize};

/// Review status of a homework submission.
///
/// The three codes are the remote API's closed contract. Anything else means
/// the contract changed and must surface as `AppError::UnknownStatus` rather
/// than pass through silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    /// Parse a raw wire status. Unknown values yield `None`; the interpreter
    /// decides whether that is an error, not the parser.
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "approved" => Some(ReviewStatus::Approved),
            "reviewing" => Some(ReviewStatus::Reviewing),
            "rejected" => Some(ReviewStatus::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStatus::Approved => write!(f, "approved"),
            ReviewStatus::Reviewing => write!(f, "reviewing"),
            ReviewStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// One homework record as extracted from the status endpoint.
///
/// Immutable once parsed; compared by value for change detection. `raw_status`
/// keeps the wire text so an unknown status can be reported verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeworkRecord {
    /// Server-side identifier, stringified (the wire sends number or string).
    /// Empty when absent — only the name is mandatory.
    pub id: String,
    /// Homework name (`homework_name` on the wire); mandatory.
    pub name: String,
    /// Parsed status, `None` when the raw value is outside the known three.
    pub status: Option<ReviewStatus>,
    /// The raw wire status text, preserved for error reporting.
    pub raw_status: String,
}

/// The ordered record list returned by one fetch. Order is server-defined;
/// only index 0 (the most recent submission) is ever acted upon.
pub type PollResult = Vec<HomeworkRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_known_codes() {
        assert_eq!(ReviewStatus::from_raw("approved"), Some(ReviewStatus::Approved));
        assert_eq!(ReviewStatus::from_raw("reviewing"), Some(ReviewStatus::Reviewing));
        assert_eq!(ReviewStatus::from_raw("rejected"), Some(ReviewStatus::Rejected));
    }

    #[test]
    fn test_from_raw_unknown_codes() {
        assert_eq!(ReviewStatus::from_raw("graded"), None);
        assert_eq!(ReviewStatus::from_raw("APPROVED"), None);
        assert_eq!(ReviewStatus::from_raw(""), None);
    }

    #[test]
    fn test_records_compare_by_value() {
        let a = HomeworkRecord {
            id: "7".into(),
            name: "hw1".into(),
            status: Some(ReviewStatus::Reviewing),
            raw_status: "reviewing".into(),
        };
        let b = a.clone();
        assert_eq!(a, b);

        let c = HomeworkRecord {
            status: Some(ReviewStatus::Approved),
            raw_status: "approved".into(),
            ..a.clone()
        };
        assert_ne!(a, c);
    }
}
