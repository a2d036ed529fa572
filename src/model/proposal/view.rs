use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::actor::ActorId;

use super::{Proposal, ProposalId};

/// An immutable snapshot of a proposal, as returned by read queries.
///
/// Detached from the registry: later mutations do not show through. The
/// vote count is materialised from the voter set at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalView {
    pub id: ProposalId,
    pub name: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub vote_count: u64,
    pub creator: ActorId,
}

impl From<&Proposal> for ProposalView {
    fn from(proposal: &Proposal) -> Self {
        Self {
            id: proposal.metadata.id,
            name: proposal.metadata.name.clone(),
            description: proposal.metadata.description.clone(),
            start_time: proposal.metadata.start_time,
            end_time: proposal.metadata.end_time,
            vote_count: proposal.vote_count(),
            creator: proposal.metadata.creator.clone(),
        }
    }
}
