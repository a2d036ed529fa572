//! Core state machine for time-bounded proposals and single-actor votes.
//!
//! The [`ProposalRegistry`] owns every proposal record and its voter set,
//! validates each operation against the business rules and the current time,
//! and answers read queries. Transport, persistence, and caller
//! authentication are the host's problem: the registry receives an already
//! authenticated [`model::actor::ActorId`] per call and reads time from the
//! [`Clock`] it was built with.

pub mod clock;
pub mod error;
pub mod logging;
pub mod model;
pub mod registry;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Error, Result, ValidationError};
pub use registry::ProposalRegistry;
