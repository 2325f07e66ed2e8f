/// Command vocabulary and the dispatcher that acts on it
pub mod commands;
/// Teloxide update handlers
pub mod handlers;
/// Platform-neutral messaging seams
pub mod platform;
/// Telegram implementation of the messaging seams
pub mod telegram;
