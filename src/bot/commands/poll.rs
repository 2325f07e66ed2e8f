use chrono::{Duration, Utc};
use std::sync::Arc;

use super::{Action, Vocabulary};
use crate::bot::platform::{display_name, InboundMessage, MessageSender, UserDirectory};
use crate::poll::{ChatKey, PlayerId, PollRegistry, PollSummary, VoteChoice, VoteReceipt};
use crate::utils::format::join_names;
use crate::utils::logging::{
    log_command_error, log_command_start, log_command_success, log_send_error, log_system_event,
};

/// Turns inbound chat text into poll operations and replies.
///
/// Owns no poll state itself; the registry is injected so several dispatchers (or tests) can
/// run against isolated registries. Platform failures are logged and swallowed.
pub struct CommandDispatcher<G> {
    registry: Arc<PollRegistry>,
    vocabulary: Vocabulary,
    gateway: G,
}

impl<G> CommandDispatcher<G>
where
    G: MessageSender + UserDirectory,
{
    pub fn new(registry: Arc<PollRegistry>, vocabulary: Vocabulary, gateway: G) -> Self {
        Self {
            registry,
            vocabulary,
            gateway,
        }
    }

    pub fn registry(&self) -> &Arc<PollRegistry> {
        &self.registry
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Handles one inbound message and returns the action it was classified as.
    pub async fn handle(&self, msg: &InboundMessage) -> Action {
        let action = self.vocabulary.classify(&msg.text);
        log_command_start(action.name(), msg.sender.0, msg.chat.0, None);

        match action {
            Action::StartPoll => self.start_poll(msg.chat, msg.sender).await,
            Action::Vote(choice) => self.vote(msg.chat, msg.sender, choice).await,
            Action::OptOut => self.opt_out(msg.chat, msg.sender).await,
            Action::CancelPoll => self.cancel_poll(msg.chat, msg.sender).await,
            Action::Help => self.send_help(msg.chat).await,
        }

        action
    }

    async fn start_poll(&self, chat: ChatKey, organizer: PlayerId) {
        match self.registry.start(chat, organizer) {
            Ok(()) => {
                self.send(chat, self.vocabulary.poll_started).await;
                log_command_success("start_poll", organizer.0, chat.0, None);
            }
            Err(e) => {
                log_command_error("start_poll", organizer.0, chat.0, &e.to_string());
                self.send(chat, self.vocabulary.error_message(e)).await;
            }
        }
    }

    async fn vote(&self, chat: ChatKey, participant: PlayerId, choice: VoteChoice) {
        let receipt = match self.registry.submit_vote(chat, participant, choice) {
            Ok(receipt) => receipt,
            Err(e) => {
                log_command_error("vote", participant.0, chat.0, &e.to_string());
                self.send(chat, self.vocabulary.error_message(e)).await;
                return;
            }
        };

        let name = self.name_of(participant).await;
        self.send(chat, &self.vocabulary.vote_recorded_text(&name, choice))
            .await;
        log_command_success("vote", participant.0, chat.0, Some(choice.as_str()));

        if let VoteReceipt::Completed(summary) = receipt {
            self.announce_results(chat, &summary).await;
            log_system_event("Poll completed", Some(&format!("chat {chat}")));
        }
    }

    async fn opt_out(&self, chat: ChatKey, user: PlayerId) {
        let name = self.name_of(user).await;
        self.send(chat, &self.vocabulary.farewell_text(&name)).await;
        log_command_success("opt_out", user.0, chat.0, None);
    }

    async fn cancel_poll(&self, chat: ChatKey, requester: PlayerId) {
        match self.registry.cancel(chat, requester) {
            Ok(poll) => {
                self.send(chat, self.vocabulary.cancelled).await;
                log_command_success(
                    "cancel_poll",
                    requester.0,
                    chat.0,
                    Some(&format!("{} votes discarded", poll.vote_count())),
                );
            }
            Err(e) => {
                log_command_error("cancel_poll", requester.0, chat.0, &e.to_string());
                self.send(chat, self.vocabulary.error_message(e)).await;
            }
        }
    }

    async fn send_help(&self, chat: ChatKey) {
        let keyboard = self.vocabulary.keyboard();
        if let Err(e) = self
            .gateway
            .send_with_keyboard(chat, self.vocabulary.help_prompt, &keyboard)
            .await
        {
            log_send_error(chat.0, &e.to_string());
        }
    }

    /// Closes every poll older than `max_age`, posting what was collected so far.
    /// Returns how many polls were closed.
    pub async fn expire_stale_polls(&self, max_age: Duration) -> usize {
        let expired = self.registry.expire_older_than(Utc::now(), max_age);

        for (chat, poll) in &expired {
            log_system_event(
                "Poll expired",
                Some(&format!("chat {} with {} votes", chat, poll.vote_count())),
            );
            self.send(*chat, self.vocabulary.expired).await;
            self.announce_results(*chat, &poll.summarize()).await;
        }

        expired.len()
    }

    async fn announce_results(&self, chat: ChatKey, summary: &PollSummary) {
        let yes = self.names_of(summary.voters(VoteChoice::Yes)).await;
        let no = self.names_of(summary.voters(VoteChoice::No)).await;
        let later = self.names_of(summary.voters(VoteChoice::Later)).await;

        self.send(chat, &self.vocabulary.results_text(&yes, &no, &later))
            .await;
    }

    async fn names_of(&self, players: &[PlayerId]) -> String {
        let mut names = Vec::with_capacity(players.len());
        for &player in players {
            names.push(self.name_of(player).await);
        }
        join_names(&names)
    }

    async fn name_of(&self, user: PlayerId) -> String {
        display_name(&self.gateway, user).await
    }

    async fn send(&self, chat: ChatKey, text: &str) {
        if let Err(e) = self.gateway.send_text(chat, text).await {
            log_send_error(chat.0, &e.to_string());
        }
    }
}
