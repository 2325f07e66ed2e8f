use anyhow::{anyhow, Result};
use chrono::Duration;
use std::env;
use std::path::Path;

use crate::bot::commands::Language;

const DEFAULT_HTTP_PORT: &str = "8080";

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub http_port: u16,
    pub language: Language,
    pub poll_timeout_minutes: Option<u32>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = first_var(&["TELEGRAM_BOT_TOKEN", "TOKEN"])
            .ok_or_else(|| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let port_str = first_var(&["HTTP_PORT", "PORT"])
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HTTP_PORT.to_string());
        let http_port = port_str
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let language = match env::var("BOT_LANGUAGE") {
            Ok(lang) if !lang.trim().is_empty() => lang
                .parse()
                .map_err(|e| anyhow!("Invalid BOT_LANGUAGE: {}", e))?,
            _ => Language::default(),
        };

        let poll_timeout_minutes = match env::var("POLL_TIMEOUT_MINUTES") {
            Ok(raw) if !raw.trim().is_empty() => match raw.trim().parse::<u32>() {
                Ok(minutes) if minutes > 0 => Some(minutes),
                _ => return Err(anyhow!("Invalid POLL_TIMEOUT_MINUTES")),
            },
            _ => None,
        };

        Ok(Config {
            telegram_bot_token: token,
            http_port,
            language,
            poll_timeout_minutes,
        })
    }

    /// Loads variables from `path` (without overriding ones already set), then reads the environment.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        dotenvy::from_path(path)
            .map_err(|e| anyhow!("Failed to load env file {}: {}", path.display(), e))?;
        Self::from_env()
    }

    pub fn poll_timeout(&self) -> Option<Duration> {
        self.poll_timeout_minutes
            .map(|minutes| Duration::minutes(i64::from(minutes)))
    }
}

fn first_var(keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| env::var(key).ok())
}
