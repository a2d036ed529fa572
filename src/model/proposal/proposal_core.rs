use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::actor::ActorId;

use super::{ProposalId, ProposalState};

/// Core proposal data, as stored in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Top-level metadata.
    #[serde(flatten)]
    pub metadata: ProposalMetadata,
    /// Actors currently holding an active vote. This set is the sole source
    /// of truth for both vote counts and has-voted queries.
    pub voters: HashSet<ActorId>,
}

impl Proposal {
    /// Create a new proposal with no votes.
    pub fn new(
        id: ProposalId,
        name: String,
        description: String,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        creator: ActorId,
    ) -> Self {
        Self {
            metadata: ProposalMetadata {
                id,
                name,
                description,
                start_time,
                end_time,
                creator,
            },
            voters: HashSet::new(),
        }
    }

    /// The lifecycle phase of this proposal at the given instant.
    pub fn state_at(&self, now: DateTime<Utc>) -> ProposalState {
        ProposalState::at(now, self.metadata.start_time, self.metadata.end_time)
    }

    /// Derived vote count: the cardinality of the voter set.
    pub fn vote_count(&self) -> u64 {
        self.voters.len() as u64
    }

    /// Whether `actor` currently holds an active vote.
    pub fn has_voted(&self, actor: &ActorId) -> bool {
        self.voters.contains(actor)
    }
}

/// A view on just the proposal's top-level metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalMetadata {
    /// Unique sequential id, assigned at creation, immutable.
    pub id: ProposalId,
    /// Proposal name. Non-empty.
    pub name: String,
    /// Proposal description. Non-empty.
    pub description: String,
    /// Voting window start.
    pub start_time: DateTime<Utc>,
    /// Voting window end (exclusive). Always after `start_time`.
    pub end_time: DateTime<Utc>,
    /// The actor that created the proposal, captured at creation, immutable.
    pub creator: ActorId,
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{Duration, TimeZone};

    use crate::model::proposal::ProposalSpec;

    #[test]
    fn vote_count_tracks_voter_set() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut proposal = ProposalSpec::current_example(now).into_proposal(0, "alice".into());
        assert_eq!(proposal.vote_count(), 0);

        proposal.voters.insert("bob".into());
        proposal.voters.insert("carol".into());
        assert_eq!(proposal.vote_count(), 2);
        assert!(proposal.has_voted(&"bob".into()));
        assert!(!proposal.has_voted(&"alice".into()));
    }

    #[test]
    fn state_follows_the_clock() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let proposal = ProposalSpec::future_example(now).into_proposal(0, "alice".into());

        assert_eq!(proposal.state_at(now), ProposalState::Pending);
        assert_eq!(
            proposal.state_at(now + Duration::seconds(100)),
            ProposalState::Active
        );
        assert_eq!(
            proposal.state_at(now + Duration::seconds(1000)),
            ProposalState::Closed
        );
    }
}
