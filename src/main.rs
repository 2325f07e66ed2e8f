//! # Rainbow Poll Bot Main Entry Point
//!
//! Initializes logging, loads configuration, starts the optional poll expiry service,
//! and runs the Telegram bot next to the HTTP liveness server.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rainbow_poll_bot::bot::commands::poll::CommandDispatcher;
use rainbow_poll_bot::bot::commands::Vocabulary;
use rainbow_poll_bot::bot::handlers::BotHandler;
use rainbow_poll_bot::bot::telegram::TelegramGateway;
use rainbow_poll_bot::config::Config;
use rainbow_poll_bot::poll::PollRegistry;
use rainbow_poll_bot::services::expiry::PollExpiryService;
use rainbow_poll_bot::services::health::HealthService;
use rainbow_poll_bot::utils::logging::log_system_event;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rainbow_poll_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match std::env::var("ENV_FILE") {
        Ok(path) => Config::from_env_file(path)?,
        Err(_) => {
            dotenvy::dotenv().ok();
            Config::from_env()?
        }
    };

    info!("Starting Rainbow Poll Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - HTTP Port: {}, Language: {}, Poll timeout: {}",
        config.http_port,
        config.language,
        config
            .poll_timeout_minutes
            .map_or_else(|| "none".to_string(), |m| format!("{m} min"))
    );

    // Initialize bot
    let bot = Bot::new(&config.telegram_bot_token);
    let registry = Arc::new(PollRegistry::new());
    let dispatcher = Arc::new(CommandDispatcher::new(
        registry.clone(),
        Vocabulary::for_language(config.language),
        TelegramGateway::new(bot.clone()),
    ));
    let handler = BotHandler::new(dispatcher.clone());
    info!("Telegram bot initialized successfully");

    let mut expiry_service = match config.poll_timeout() {
        Some(max_age) => {
            let mut service = PollExpiryService::new(dispatcher.clone(), max_age).await?;
            service.start().await?;
            Some(service)
        }
        None => {
            info!("Poll expiry disabled - polls stay open until answered or cancelled");
            None
        }
    };

    let health_service = HealthService::new(registry);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handler.schema())
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    if let Some(service) = expiry_service.as_mut() {
        if let Err(e) = service.stop().await {
            tracing::warn!("Error stopping poll expiry service: {}", e);
        }
    }

    log_system_event("Application stopped", None);
    Ok(())
}
