use std::time::Duration;

use reviewwatch_client::PracticumClient;
use reviewwatch_common::config::AppConfig;
use reviewwatch_monitor::Watcher;
use reviewwatch_notifier::TelegramSink;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reviewwatch_monitor=info,reviewwatch_client=debug".into()),
        )
        .json()
        .init();

    tracing::info!("ReviewWatch starting...");

    // Load configuration; a missing token is fatal before the loop starts
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(error = %error, "Configuration is incomplete, exiting");
            std::process::exit(1);
        }
    };

    let source = PracticumClient::new(
        config.status_endpoint.clone(),
        config.practicum_token.clone(),
    )?;
    let sink = TelegramSink::new(&config.telegram_token, config.telegram_chat_id.clone())?;

    let mut watcher = Watcher::new(
        source,
        sink,
        Duration::from_secs(config.poll_interval_secs),
    );

    // Run with graceful shutdown on Ctrl+C; the select also cancels a sleep
    // in progress so shutdown is prompt
    tokio::select! {
        _ = watcher.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping gracefully...");
        }
    }

    tracing::info!("ReviewWatch stopped.");
    Ok(())
}
