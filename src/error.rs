use thiserror::Error;

/// Domain errors raised by poll operations. None of them mutate state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollError {
    #[error("a poll is already active in this chat")]
    AlreadyActive,

    #[error("no poll is active in this chat")]
    NotStarted,

    #[error("participant has already voted")]
    DuplicateVote,

    #[error("only the organizer can cancel the poll")]
    NotOrganizer,
}

/// Failures talking to the messaging platform.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("failed to send message: {0}")]
    Send(String),

    #[error("failed to look up user: {0}")]
    Lookup(String),
}
