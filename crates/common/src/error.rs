use thiserror::Error;

/// Common error types used across the application.
///
/// One closed enumeration: every failure path in the workspace produces one of
/// these variants, and the watcher's recovery boundary consumes them uniformly.
/// Only `Config` is fatal; every other variant is reported and survived.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Status endpoint returned HTTP {0}")]
    HttpStatus(u16),

    #[error("Malformed response: {0}")]
    WrongShape(String),

    #[error("Missing fields in response: {0}")]
    MissingFields(String),

    #[error("Unknown review status: {0:?}")]
    UnknownStatus(String),

    #[error("Delivery error: {0}")]
    Delivery(String),
}

impl AppError {
    /// Whether this error must terminate the process.
    ///
    /// Configuration errors are checked once, before the poll loop starts;
    /// everything else is caught at the watcher boundary and reported.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_config_is_fatal() {
        assert!(AppError::Config("PRACTICUM_TOKEN missing".into()).is_fatal());
        assert!(!AppError::Transport("connect timeout".into()).is_fatal());
        assert!(!AppError::HttpStatus(503).is_fatal());
        assert!(!AppError::WrongShape("not an object".into()).is_fatal());
        assert!(!AppError::MissingFields("homework_name".into()).is_fatal());
        assert!(!AppError::UnknownStatus("graded".into()).is_fatal());
        assert!(!AppError::Delivery("telegram 502".into()).is_fatal());
    }

    #[test]
    fn test_display_carries_cause() {
        let e = AppError::HttpStatus(404);
        assert_eq!(e.to_string(), "Status endpoint returned HTTP 404");

        let e = AppError::UnknownStatus("graded".into());
        assert!(e.to_string().contains("graded"));
    }
}
