use std::sync::Arc;
use teloxide::prelude::*;

use super::TelegramDispatcher;
use crate::bot::platform::InboundMessage;
use crate::poll::{ChatKey, PlayerId};

/// Extracts the `(chat, sender, text)` triple from a Telegram message.
///
/// Messages without a sender (channel posts) are skipped. Non-text messages are kept with
/// empty text, so they fall through to the help prompt.
pub fn inbound_from(msg: &Message) -> Option<InboundMessage> {
    let sender = msg.from()?;
    Some(InboundMessage::new(
        ChatKey(msg.chat.id.0),
        PlayerId(sender.id.0),
        msg.text().unwrap_or_default(),
    ))
}

pub async fn message_handler(
    msg: Message,
    dispatcher: Arc<TelegramDispatcher>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    match inbound_from(&msg) {
        Some(inbound) => {
            dispatcher.handle(&inbound).await;
        }
        None => {
            tracing::debug!("Ignoring message {} without sender in chat {}", msg.id.0, msg.chat.id.0);
        }
    }
    Ok(())
}
