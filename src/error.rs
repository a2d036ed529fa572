use thiserror::Error;

use crate::model::proposal::ProposalId;

pub type Result<T> = std::result::Result<T, Error>;

/// Every way an operation on the registry can be rejected.
///
/// All of these are terminal and synchronous: the caller sees the first
/// failing check for its operation, and the registry is left exactly as it
/// was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("No proposal with id {0}")]
    NotFound(ProposalId),
    #[error("Only the creator can edit the proposal")]
    NotCreator,
    #[error("Cannot edit a proposal after voting has started")]
    EditClosed,
    #[error("Voting is not allowed at this time")]
    VotingClosed,
    #[error("Cannot undo vote outside voting period")]
    UndoClosed,
    #[error("You have already voted")]
    AlreadyVoted,
    #[error("You have not voted yet")]
    NotVoted,
}

/// Malformed creation input. Checks run in declaration order and the first
/// failure wins, so a spec that is wrong in several ways reports only the
/// first problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    EmptyName,
    #[error("Description is required")]
    EmptyDescription,
    #[error("End date must be after start date")]
    EndBeforeStart,
}
