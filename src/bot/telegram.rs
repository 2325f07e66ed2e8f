use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{KeyboardButton, KeyboardMarkup, ReplyMarkup};

use crate::bot::platform::{MessageSender, ReplyKeyboard, UserDirectory};
use crate::error::GatewayError;
use crate::poll::{ChatKey, PlayerId};

/// [`MessageSender`] and [`UserDirectory`] backed by the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramGateway {
    bot: Bot,
}

impl TelegramGateway {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

/// Converts the platform-neutral keyboard into Telegram markup.
pub fn keyboard_markup(keyboard: &ReplyKeyboard) -> KeyboardMarkup {
    KeyboardMarkup::new(
        keyboard
            .rows
            .iter()
            .map(|row| row.iter().map(KeyboardButton::new).collect::<Vec<_>>()),
    )
}

#[async_trait]
impl MessageSender for TelegramGateway {
    async fn send_text(&self, chat: ChatKey, text: &str) -> Result<(), GatewayError> {
        self.bot
            .send_message(ChatId(chat.0), text)
            .await
            .map(|_| ())
            .map_err(|e| GatewayError::Send(e.to_string()))
    }

    async fn send_with_keyboard(
        &self,
        chat: ChatKey,
        text: &str,
        keyboard: &ReplyKeyboard,
    ) -> Result<(), GatewayError> {
        self.bot
            .send_message(ChatId(chat.0), text)
            .reply_markup(ReplyMarkup::Keyboard(keyboard_markup(keyboard)))
            .await
            .map(|_| ())
            .map_err(|e| GatewayError::Send(e.to_string()))
    }
}

#[async_trait]
impl UserDirectory for TelegramGateway {
    async fn lookup_name(&self, user: PlayerId) -> Result<String, GatewayError> {
        let chat_id = i64::try_from(user.0)
            .map_err(|_| GatewayError::Lookup(format!("user id {user} out of chat id range")))?;

        let chat = self
            .bot
            .get_chat(ChatId(chat_id))
            .await
            .map_err(|e| GatewayError::Lookup(e.to_string()))?;

        if let Some(username) = chat.username() {
            return Ok(format!("@{username}"));
        }

        chat.first_name()
            .map(str::to_string)
            .ok_or_else(|| GatewayError::Lookup(format!("user {user} has no public name")))
    }
}
