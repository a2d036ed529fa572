use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Phases of a proposal's lifecycle.
///
/// There is no stored state field: the phase is always derived from the
/// clock and the voting window, so it cannot drift from the timestamps.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalState {
    /// Voting window not yet open. The creator may still edit.
    Pending,
    /// Voting window open. Votes may be cast and retracted.
    Active,
    /// Voting window over. The record is read-only.
    Closed,
}

impl ProposalState {
    /// Derive the phase of the window `[start_time, end_time)` at `now`.
    /// The window is inclusive at the start and exclusive at the end.
    pub fn at(now: DateTime<Utc>, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        if now < start_time {
            Self::Pending
        } else if now < end_time {
            Self::Active
        } else {
            Self::Closed
        }
    }
}
