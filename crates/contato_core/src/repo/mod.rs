//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define data access contracts for contacts.
//! - Isolate SQLite query details from store orchestration.
//!
//! # Invariants
//! - Repository writes enforce `NewContact::validate()` before persistence.

pub mod contact_repo;
