pub mod message;

use std::sync::Arc;
use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::bot::commands::poll::CommandDispatcher;
use crate::bot::telegram::TelegramGateway;

/// Dispatcher wired to the live Telegram gateway.
pub type TelegramDispatcher = CommandDispatcher<TelegramGateway>;

pub struct BotHandler {
    pub dispatcher: Arc<TelegramDispatcher>,
}

impl BotHandler {
    pub fn new(dispatcher: Arc<TelegramDispatcher>) -> Self {
        Self { dispatcher }
    }

    pub fn schema(&self) -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
        use teloxide::dispatching::UpdateFilterExt;

        let dispatcher = self.dispatcher.clone();

        Update::filter_message().endpoint(move |msg: Message| {
            let dispatcher = dispatcher.clone();
            async move { message::message_handler(msg, dispatcher).await }
        })
    }
}
