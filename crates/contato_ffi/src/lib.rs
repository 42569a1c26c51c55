//! Flutter-facing bindings for the Contato core.

pub mod api;
pub mod shell;
