use chrono::{DateTime, Utc};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use crate::error::PollError;

/// Number of distinct voters that closes a poll.
pub const COMPLETION_THRESHOLD: usize = 3;

/// Chat a poll lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChatKey(pub i64);

impl fmt::Display for ChatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Platform user taking part in a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A participant's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteChoice {
    Yes,
    No,
    Later,
}

impl VoteChoice {
    /// Stable lowercase name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteChoice::Yes => "yes",
            VoteChoice::No => "no",
            VoteChoice::Later => "later",
        }
    }
}

/// One round of "who wants to play" in a single chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poll {
    organizer: PlayerId,
    started_at: DateTime<Utc>,
    votes: HashMap<PlayerId, VoteChoice>,
}

impl Poll {
    pub fn new(organizer: PlayerId, started_at: DateTime<Utc>) -> Self {
        Self {
            organizer,
            started_at,
            votes: HashMap::new(),
        }
    }

    pub fn organizer(&self) -> PlayerId {
        self.organizer
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn votes(&self) -> &HashMap<PlayerId, VoteChoice> {
        &self.votes
    }

    pub fn vote_of(&self, participant: PlayerId) -> Option<VoteChoice> {
        self.votes.get(&participant).copied()
    }

    pub fn vote_count(&self) -> usize {
        self.votes.len()
    }

    /// Records the first vote of `participant`; later votes are rejected untouched.
    pub fn submit_vote(&mut self, participant: PlayerId, choice: VoteChoice) -> Result<(), PollError> {
        match self.votes.entry(participant) {
            Entry::Occupied(_) => Err(PollError::DuplicateVote),
            Entry::Vacant(slot) => {
                slot.insert(choice);
                Ok(())
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.votes.len() >= COMPLETION_THRESHOLD
    }

    /// Partitions every voter by answer. Each list is sorted by id.
    pub fn summarize(&self) -> PollSummary {
        let mut summary = PollSummary::default();
        for (&participant, &choice) in &self.votes {
            match choice {
                VoteChoice::Yes => summary.yes.push(participant),
                VoteChoice::Later => summary.later.push(participant),
                VoteChoice::No => summary.no.push(participant),
            }
        }
        summary.yes.sort();
        summary.no.sort();
        summary.later.sort();
        summary
    }
}

/// Voters grouped by their answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollSummary {
    pub yes: Vec<PlayerId>,
    pub no: Vec<PlayerId>,
    pub later: Vec<PlayerId>,
}

impl PollSummary {
    pub fn voters(&self, choice: VoteChoice) -> &[PlayerId] {
        match choice {
            VoteChoice::Yes => &self.yes,
            VoteChoice::No => &self.no,
            VoteChoice::Later => &self.later,
        }
    }

    pub fn total(&self) -> usize {
        self.yes.len() + self.no.len() + self.later.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn poll() -> Poll {
        Poll::new(PlayerId(1), Utc::now())
    }

    #[test]
    fn test_first_vote_wins() {
        let mut poll = poll();
        poll.submit_vote(PlayerId(2), VoteChoice::Yes).unwrap();

        assert_eq!(
            poll.submit_vote(PlayerId(2), VoteChoice::No),
            Err(PollError::DuplicateVote)
        );
        assert_eq!(poll.vote_count(), 1);
        assert_eq!(poll.vote_of(PlayerId(2)), Some(VoteChoice::Yes));
    }

    #[test]
    fn test_completes_on_third_distinct_voter() {
        let mut poll = poll();
        poll.submit_vote(PlayerId(2), VoteChoice::No).unwrap();
        assert!(!poll.is_complete());
        poll.submit_vote(PlayerId(3), VoteChoice::No).unwrap();
        assert!(!poll.is_complete());
        let _ = poll.submit_vote(PlayerId(3), VoteChoice::Yes);
        assert!(!poll.is_complete());
        poll.submit_vote(PlayerId(4), VoteChoice::No).unwrap();
        assert!(poll.is_complete());
    }

    #[test]
    fn test_organizer_may_vote() {
        let mut poll = poll();
        poll.submit_vote(poll.organizer(), VoteChoice::Yes).unwrap();
        assert_eq!(poll.vote_of(PlayerId(1)), Some(VoteChoice::Yes));
    }

    #[test]
    fn test_summary_is_exhaustive_and_disjoint() {
        let mut poll = poll();
        poll.submit_vote(PlayerId(5), VoteChoice::Later).unwrap();
        poll.submit_vote(PlayerId(2), VoteChoice::Yes).unwrap();
        poll.submit_vote(PlayerId(4), VoteChoice::No).unwrap();
        poll.submit_vote(PlayerId(3), VoteChoice::Yes).unwrap();

        let summary = poll.summarize();
        assert_eq!(summary.yes, vec![PlayerId(2), PlayerId(3)]);
        assert_eq!(summary.no, vec![PlayerId(4)]);
        assert_eq!(summary.later, vec![PlayerId(5)]);
        assert_eq!(summary.total(), poll.vote_count());
    }

    #[test]
    fn test_empty_summary() {
        let summary = poll().summarize();
        assert_eq!(summary, PollSummary::default());
        assert!(summary.voters(VoteChoice::Yes).is_empty());
    }
}
