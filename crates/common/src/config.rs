use crate::error::AppError;

/// Default status endpoint (Practicum homework statuses API).
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default steady-state poll interval in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Secret token for the status endpoint (`Authorization: OAuth <token>`)
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Destination Telegram chat identifier
    pub telegram_chat_id: String,

    /// Status endpoint URL
    pub status_endpoint: String,

    /// Poll interval in seconds (default: 600)
    pub poll_interval_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// The three tokens are mandatory; their absence is a fatal `Config` error
    /// surfaced before the poll loop starts. A `.env` file is honored when
    /// present.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            practicum_token: require("PRACTICUM_TOKEN")?,
            telegram_token: require("TELEGRAM_TOKEN")?,
            telegram_chat_id: require("TELEGRAM_CHAT_ID")?,
            status_endpoint: std::env::var("STATUS_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            poll_interval_secs: std::env::var("POLL_INTERVAL_SECS")
                .unwrap_or_else(|_| DEFAULT_POLL_INTERVAL_SECS.to_string())
                .parse()
                .map_err(|_| {
                    AppError::Config("POLL_INTERVAL_SECS must be a valid u64".to_string())
                })?,
        })
    }
}

/// Read a mandatory variable; absent or empty is a fatal configuration error.
fn require(name: &str) -> Result<String, AppError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::Config(format!(
            "{name} environment variable is required"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_empty() {
        // SAFETY: test-only env mutation, no concurrent readers of this key
        unsafe { std::env::set_var("REVIEWWATCH_TEST_EMPTY", "") };
        assert!(require("REVIEWWATCH_TEST_EMPTY").is_err());
    }

    #[test]
    fn test_require_reports_variable_name() {
        let err = require("REVIEWWATCH_TEST_ABSENT").unwrap_err();
        assert!(err.to_string().contains("REVIEWWATCH_TEST_ABSENT"));
        assert!(err.is_fatal());
    }
}
