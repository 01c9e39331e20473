//! Application layer: the calculator session.
//!
//! `MeetingSession` ties the participant store, the validator and the cost
//! calculator together behind the operations the form exposes.

pub mod session;
