use tracing::{error, info, warn};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, user_id: u64, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!(
            "CMD_START: {} by user {} in chat {} - {}",
            command, user_id, chat_id, d
        ),
        None => info!("CMD_START: {} by user {} in chat {}", command, user_id, chat_id),
    }
}

/// Logs command completion with consistent format
pub fn log_command_success(command: &str, user_id: u64, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!(
            "CMD_SUCCESS: {} by user {} in chat {} - {}",
            command, user_id, chat_id, d
        ),
        None => info!("CMD_SUCCESS: {} by user {} in chat {}", command, user_id, chat_id),
    }
}

/// Logs command errors with consistent format
pub fn log_command_error(command: &str, user_id: u64, chat_id: i64, error: &str) {
    warn!(
        "CMD_ERROR: {} by user {} in chat {} - {}",
        command, user_id, chat_id, error
    );
}

/// Logs an outbound message that never reached the platform
pub fn log_send_error(chat_id: i64, error: &str) {
    error!("SEND_ERROR: message to chat {} dropped - {}", chat_id, error);
}

/// Logs a failed display name lookup
pub fn log_lookup_error(user_id: u64, error: &str) {
    warn!("LOOKUP_ERROR: user {} - {}", user_id, error);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
