//! Seams between the poll logic and the messaging platform.

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::poll::{ChatKey, PlayerId};
use crate::utils::logging::log_lookup_error;

/// The part of an update the bot acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub chat: ChatKey,
    pub sender: PlayerId,
    pub text: String,
}

impl InboundMessage {
    pub fn new(chat: ChatKey, sender: PlayerId, text: impl Into<String>) -> Self {
        Self {
            chat,
            sender,
            text: text.into(),
        }
    }
}

/// Grid of suggested replies rendered under the input field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplyKeyboard {
    pub rows: Vec<Vec<String>>,
}

impl ReplyKeyboard {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}

/// Outbound chat messages. Delivery is fire-and-forget for callers.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_text(&self, chat: ChatKey, text: &str) -> Result<(), GatewayError>;

    async fn send_with_keyboard(
        &self,
        chat: ChatKey,
        text: &str,
        keyboard: &ReplyKeyboard,
    ) -> Result<(), GatewayError>;
}

/// Resolves user ids to something printable.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn lookup_name(&self, user: PlayerId) -> Result<String, GatewayError>;
}

/// Label used when a user's name cannot be resolved.
pub fn placeholder_name(user: PlayerId) -> String {
    format!("Player {}", user.0)
}

/// Looks up a display name, falling back to [`placeholder_name`] on any failure.
pub async fn display_name<D>(directory: &D, user: PlayerId) -> String
where
    D: UserDirectory + ?Sized,
{
    match directory.lookup_name(user).await {
        Ok(name) if !name.trim().is_empty() => name,
        Ok(_) => placeholder_name(user),
        Err(e) => {
            log_lookup_error(user.0, &e.to_string());
            placeholder_name(user)
        }
    }
}
