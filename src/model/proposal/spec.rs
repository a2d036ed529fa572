use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::actor::ActorId;

use super::{Proposal, ProposalId};

/// A proposal specification, as submitted by a creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalSpec {
    /// Proposal name.
    pub name: String,
    /// Proposal description.
    pub description: String,
    /// Voting window start.
    pub start_time: DateTime<Utc>,
    /// Voting window end (exclusive).
    pub end_time: DateTime<Utc>,
}

impl ProposalSpec {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            start_time,
            end_time,
        }
    }

    /// Check the creation rules. The first failing check wins: name, then
    /// description, then time ordering.
    ///
    /// Note that the window may lie anywhere relative to the current time;
    /// proposals whose window is already open, or even already over, are
    /// legal to create.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if self.end_time <= self.start_time {
            return Err(ValidationError::EndBeforeStart);
        }
        Ok(())
    }

    /// Convert this spec into a stored proposal with the given unique id.
    pub fn into_proposal(self, id: ProposalId, creator: ActorId) -> Proposal {
        Proposal::new(
            id,
            self.name,
            self.description,
            self.start_time,
            self.end_time,
            creator,
        )
    }
}
