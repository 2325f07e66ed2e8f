use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::model::{ChatKey, PlayerId, Poll, PollSummary, VoteChoice};
use crate::error::PollError;

/// Result of a vote that was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteReceipt {
    /// Vote stored, poll still open.
    Recorded,
    /// Vote stored and it closed the poll; the poll is already gone from the registry.
    Completed(PollSummary),
}

/// Active polls keyed by chat, at most one per chat.
///
/// Every operation runs under a single lock, so check-then-create, vote-then-complete and
/// complete-then-remove are each one atomic step. The lock is never held across an await.
#[derive(Debug, Default)]
pub struct PollRegistry {
    polls: Mutex<HashMap<ChatKey, Poll>>,
}

impl PollRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a poll for `chat` unless one is already running there.
    pub fn start(&self, chat: ChatKey, organizer: PlayerId) -> Result<(), PollError> {
        self.start_at(chat, organizer, Utc::now())
    }

    pub fn start_at(
        &self,
        chat: ChatKey,
        organizer: PlayerId,
        started_at: DateTime<Utc>,
    ) -> Result<(), PollError> {
        match self.polls.lock().entry(chat) {
            Entry::Occupied(_) => Err(PollError::AlreadyActive),
            Entry::Vacant(slot) => {
                slot.insert(Poll::new(organizer, started_at));
                Ok(())
            }
        }
    }

    /// Snapshot of the active poll in `chat`.
    pub fn get(&self, chat: ChatKey) -> Option<Poll> {
        self.polls.lock().get(&chat).cloned()
    }

    pub fn remove(&self, chat: ChatKey) -> Option<Poll> {
        self.polls.lock().remove(&chat)
    }

    /// Records a vote and, when it reaches the threshold, closes and removes the poll in the
    /// same critical section. Only one caller can ever observe `Completed` for a poll.
    pub fn submit_vote(
        &self,
        chat: ChatKey,
        participant: PlayerId,
        choice: VoteChoice,
    ) -> Result<VoteReceipt, PollError> {
        let mut polls = self.polls.lock();
        let poll = polls.get_mut(&chat).ok_or(PollError::NotStarted)?;
        poll.submit_vote(participant, choice)?;

        if !poll.is_complete() {
            return Ok(VoteReceipt::Recorded);
        }

        let summary = poll.summarize();
        polls.remove(&chat);
        Ok(VoteReceipt::Completed(summary))
    }

    /// Removes the poll in `chat` if `requester` organized it.
    pub fn cancel(&self, chat: ChatKey, requester: PlayerId) -> Result<Poll, PollError> {
        let mut polls = self.polls.lock();
        match polls.entry(chat) {
            Entry::Vacant(_) => Err(PollError::NotStarted),
            Entry::Occupied(slot) if slot.get().organizer() != requester => {
                Err(PollError::NotOrganizer)
            }
            Entry::Occupied(slot) => Ok(slot.remove()),
        }
    }

    /// Removes and returns every poll started before `now - max_age`.
    pub fn expire_older_than(&self, now: DateTime<Utc>, max_age: Duration) -> Vec<(ChatKey, Poll)> {
        let cutoff = now - max_age;
        let mut polls = self.polls.lock();
        let stale: Vec<ChatKey> = polls
            .iter()
            .filter(|(_, poll)| poll.started_at() < cutoff)
            .map(|(chat, _)| *chat)
            .collect();

        let mut expired: Vec<(ChatKey, Poll)> = stale
            .into_iter()
            .filter_map(|chat| polls.remove(&chat).map(|poll| (chat, poll)))
            .collect();
        expired.sort_by_key(|(chat, _)| *chat);
        expired
    }

    pub fn active_count(&self) -> usize {
        self.polls.lock().len()
    }
}
