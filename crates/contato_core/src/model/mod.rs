//! Contact domain model and boundary response envelopes.
//!
//! # Responsibility
//! - Define the single persisted entity (`Contact`).
//! - Define the structured results returned across the UI boundary.
//!
//! # Invariants
//! - Failures are reported through envelopes, never raised to the caller.

pub mod contact;
pub mod response;
