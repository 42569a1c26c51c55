//! Core domain logic for the Contato contact manager.
//! This crate is the single source of truth for contact invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod router;
pub mod service;
pub mod validation;

pub use config::{AppConfig, AppMode, ExposedSurface};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::contact::{Contact, ContactId, ContactValidationError, NewContact};
pub use model::response::{
    ActionResponse, ContactListResponse, ContactLookupResponse, ContactSlot,
};
pub use repo::contact_repo::{ContactRepository, RepoError, RepoResult, SqliteContactRepository};
pub use router::{Command, CommandReply, CommandRouter, RouterError};
pub use service::contact_store::{ContactStore, StoreOptions};
pub use validation::{is_valid_contact_id, validate};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Returns the linked SQLite library version.
pub fn sqlite_version() -> &'static str {
    rusqlite::version()
}
