pub mod actor;
pub mod proposal;
