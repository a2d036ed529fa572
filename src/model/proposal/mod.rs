pub use proposal_core::{Proposal, ProposalMetadata};
pub use spec::ProposalSpec;
pub use state::ProposalState;
pub use view::ProposalView;

mod proposal_core;
mod spec;
mod state;
mod view;

/// Proposal identifiers are a dense sequence: 0-based, assigned in creation
/// order, never reused.
pub type ProposalId = u64;
