use std::collections::HashMap;

use log::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use crate::model::actor::ActorId;
use crate::model::proposal::{
    Proposal, ProposalId, ProposalSpec, ProposalState, ProposalView,
};

/// A counter used to implement the auto-increment proposal id.
///
/// Advanced only on successful creation and never rolled back, so ids are
/// dense, strictly increasing, and never reused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    next: ProposalId,
}

impl Counter {
    /// Create a new `Counter` starting at the given value.
    pub fn new(start: ProposalId) -> Self {
        Self { next: start }
    }

    /// Retrieve the next value of the counter, advancing it.
    pub fn next(&mut self) -> ProposalId {
        let value = self.next;
        self.next += 1;
        value
    }

    /// The value the next call to [`Counter::next`] will return.
    pub fn peek(&self) -> ProposalId {
        self.next
    }
}

/// The proposal table, its voter sets, and everything needed to validate
/// operations against them.
///
/// Every operation is all-or-nothing: validation happens up front against a
/// single clock reading, and no state is touched on the failure paths. All
/// mutating operations take `&mut self`, so the registry is strictly
/// serialized by construction; a concurrent host must provide its own
/// mutual-exclusion boundary around it.
#[derive(Debug)]
pub struct ProposalRegistry<C: Clock = SystemClock> {
    clock: C,
    counter: Counter,
    proposals: HashMap<ProposalId, Proposal>,
    by_creator: HashMap<ActorId, Vec<ProposalId>>,
}

impl ProposalRegistry<SystemClock> {
    /// An empty registry driven by the wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ProposalRegistry<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ProposalRegistry<C> {
    /// An empty registry driven by the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            counter: Counter::new(0),
            proposals: HashMap::new(),
            by_creator: HashMap::new(),
        }
    }

    /// The clock driving this registry.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Register a new proposal and return its id.
    ///
    /// Any actor may create a proposal, and the window may lie anywhere
    /// relative to the current time. Invalid specs are rejected before the
    /// id counter moves.
    pub fn create(&mut self, spec: ProposalSpec, caller: ActorId) -> Result<ProposalId> {
        spec.validate()?;

        let id = self.counter.next();
        let proposal = spec.into_proposal(id, caller.clone());
        self.by_creator.entry(caller).or_default().push(id);
        self.proposals.insert(id, proposal);

        info!("proposal {id} created");
        Ok(id)
    }

    /// Replace a proposal's name and description.
    ///
    /// Only the creator may edit, and only while the proposal is still
    /// pending. The window, the creator, and any votes are untouched. The
    /// new fields are not re-validated for emptiness; only creation
    /// enforces that.
    pub fn edit(
        &mut self,
        id: ProposalId,
        name: impl Into<String>,
        description: impl Into<String>,
        caller: &ActorId,
    ) -> Result<()> {
        let now = self.clock.now();
        let proposal = self.proposals.get_mut(&id).ok_or(Error::NotFound(id))?;
        if *caller != proposal.metadata.creator {
            return Err(Error::NotCreator);
        }
        if proposal.state_at(now) != ProposalState::Pending {
            return Err(Error::EditClosed);
        }

        proposal.metadata.name = name.into();
        proposal.metadata.description = description.into();

        debug!("proposal {id} edited");
        Ok(())
    }

    /// Cast `caller`'s vote on a proposal.
    ///
    /// Allowed only inside the open window and only once per actor.
    pub fn vote(&mut self, id: ProposalId, caller: ActorId) -> Result<()> {
        let now = self.clock.now();
        let proposal = self.proposals.get_mut(&id).ok_or(Error::NotFound(id))?;
        if proposal.state_at(now) != ProposalState::Active {
            return Err(Error::VotingClosed);
        }
        if !proposal.voters.insert(caller) {
            return Err(Error::AlreadyVoted);
        }

        debug!("vote cast on proposal {id}, count now {}", proposal.vote_count());
        Ok(())
    }

    /// Retract `caller`'s vote on a proposal.
    ///
    /// Allowed only while the window is still open. Membership is checked
    /// before the window: an actor who never voted is told so even after
    /// the window has closed.
    pub fn undo_vote(&mut self, id: ProposalId, caller: &ActorId) -> Result<()> {
        let now = self.clock.now();
        let proposal = self.proposals.get_mut(&id).ok_or(Error::NotFound(id))?;
        if !proposal.has_voted(caller) {
            return Err(Error::NotVoted);
        }
        if proposal.state_at(now) != ProposalState::Active {
            return Err(Error::UndoClosed);
        }

        proposal.voters.remove(caller);
        debug!("vote undone on proposal {id}, count now {}", proposal.vote_count());
        Ok(())
    }

    /// An immutable snapshot of the proposal, including its derived vote
    /// count.
    pub fn get(&self, id: ProposalId) -> Result<ProposalView> {
        self.proposals
            .get(&id)
            .map(ProposalView::from)
            .ok_or(Error::NotFound(id))
    }

    /// Whether `actor` currently holds an active vote on the proposal.
    pub fn has_voted(&self, id: ProposalId, actor: &ActorId) -> Result<bool> {
        let proposal = self.proposals.get(&id).ok_or(Error::NotFound(id))?;
        Ok(proposal.has_voted(actor))
    }

    /// The lifecycle phase of the proposal at the current clock reading.
    pub fn state(&self, id: ProposalId) -> Result<ProposalState> {
        let now = self.clock.now();
        let proposal = self.proposals.get(&id).ok_or(Error::NotFound(id))?;
        Ok(proposal.state_at(now))
    }

    /// The number of proposals created so far. Also the id the next
    /// successful creation will receive.
    pub fn count(&self) -> u64 {
        self.counter.peek()
    }

    /// Ids of the proposals created by `actor`, in creation order.
    pub fn proposals_by_creator(&self, actor: &ActorId) -> &[ProposalId] {
        self.by_creator
            .get(actor)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
