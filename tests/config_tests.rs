#![allow(clippy::unwrap_used)]

use rainbow_poll_bot::bot::commands::Language;
use rainbow_poll_bot::config::Config;
use std::env;
use std::io::Write;
use std::sync::Mutex;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

const VARS: [&str; 6] = [
    "TELEGRAM_BOT_TOKEN",
    "TOKEN",
    "HTTP_PORT",
    "PORT",
    "BOT_LANGUAGE",
    "POLL_TIMEOUT_MINUTES",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("HTTP_PORT", "9090");
    env::set_var("BOT_LANGUAGE", "ru");
    env::set_var("POLL_TIMEOUT_MINUTES", "30");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.http_port, 9090);
    assert_eq!(config.language, Language::Russian);
    assert_eq!(config.poll_timeout_minutes, Some(30));
    assert_eq!(config.poll_timeout(), Some(chrono::Duration::minutes(30)));

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "required_token");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "required_token");
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.language, Language::English);
    assert_eq!(config.poll_timeout_minutes, None);
    assert!(config.poll_timeout().is_none());

    clear_env();
}

#[test]
fn test_config_short_variable_names() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TOKEN", "short_token");
    env::set_var("PORT", "5000");

    let config = Config::from_env().unwrap();
    assert_eq!(config.telegram_bot_token, "short_token");
    assert_eq!(config.http_port, 5000);

    // Long names take precedence
    env::set_var("TELEGRAM_BOT_TOKEN", "long_token");
    env::set_var("HTTP_PORT", "6000");
    let config = Config::from_env().unwrap();
    assert_eq!(config.telegram_bot_token, "long_token");
    assert_eq!(config.http_port, 6000);

    clear_env();
}

#[test]
fn test_config_missing_required_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("TELEGRAM_BOT_TOKEN must be set"));
}

#[test]
fn test_config_blank_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "   ");
    let result = Config::from_env();
    assert!(result.is_err());

    clear_env();
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("HTTP_PORT", "invalid_port");

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Invalid HTTP_PORT"));

    env::set_var("HTTP_PORT", "65536");
    assert!(Config::from_env().is_err());

    env::set_var("HTTP_PORT", "  3000  ");
    assert_eq!(Config::from_env().unwrap().http_port, 3000);

    clear_env();
}

#[test]
fn test_config_invalid_language() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("BOT_LANGUAGE", "klingon");

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Invalid BOT_LANGUAGE"));

    env::set_var("BOT_LANGUAGE", " EN ");
    assert_eq!(Config::from_env().unwrap().language, Language::English);

    clear_env();
}

#[test]
fn test_config_invalid_poll_timeout() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");

    for bad in ["0", "-5", "soon"] {
        env::set_var("POLL_TIMEOUT_MINUTES", bad);
        let result = Config::from_env();
        assert!(result.is_err(), "{bad} should be rejected");
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid POLL_TIMEOUT_MINUTES"));
    }

    env::set_var("POLL_TIMEOUT_MINUTES", "");
    assert_eq!(Config::from_env().unwrap().poll_timeout_minutes, None);

    clear_env();
}

#[test]
fn test_config_from_env_file() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "TELEGRAM_BOT_TOKEN=file_token").unwrap();
    writeln!(file, "HTTP_PORT=7070").unwrap();
    writeln!(file, "BOT_LANGUAGE=ru").unwrap();

    let config = Config::from_env_file(file.path()).unwrap();

    assert_eq!(config.telegram_bot_token, "file_token");
    assert_eq!(config.http_port, 7070);
    assert_eq!(config.language, Language::Russian);

    clear_env();
}

#[test]
fn test_config_missing_env_file() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    let dir = tempfile::tempdir().unwrap();
    let result = Config::from_env_file(dir.path().join("missing.env"));

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Failed to load env file"));
}
