//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into boundary-level operations.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod contact_store;
