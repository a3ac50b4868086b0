//! Telegram Bot API delivery.

use std::time::Duration;

use async_trait::async_trait;

use reviewwatch_common::error::AppError;

use crate::MessageSink;

/// Request timeout for the Bot API.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Sink that posts messages to a fixed chat through the Telegram Bot API.
pub struct TelegramSink {
    http: reqwest::Client,
    /// `sendMessage` URL with the bot token baked in.
    send_url: String,
    chat_id: String,
}

impl TelegramSink {
    pub fn new(bot_token: &str, chat_id: String) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Delivery(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            send_url: format!("https://api.telegram.org/bot{bot_token}/sendMessage"),
            chat_id,
        })
    }
}

#[async_trait]
impl MessageSink for TelegramSink {
    /// POST `sendMessage` with JSON body `{chat_id, text}`.
    async fn send(&self, text: &str) -> Result<(), AppError> {
        let response = self
            .http
            .post(&self.send_url)
            .json(&serde_json::json!({
                "chat_id": self.chat_id,
                "text": text,
            }))
            .send()
            .await
            .map_err(|e| AppError::Delivery(format!("telegram request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Delivery(format!(
                "telegram returned HTTP {}",
                status.as_u16()
            )));
        }

        tracing::debug!(chat_id = %self.chat_id, "Telegram accepted the message");
        Ok(())
    }
}
