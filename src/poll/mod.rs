//! In-memory poll state: the per-chat [`Poll`] and the [`PollRegistry`] that owns them.

pub mod model;
pub mod registry;

pub use model::{ChatKey, PlayerId, Poll, PollSummary, VoteChoice, COMPLETION_THRESHOLD};
pub use registry::{PollRegistry, VoteReceipt};
