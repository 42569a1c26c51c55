//! Structured results returned by store and router operations.
//!
//! # Responsibility
//! - Carry success/failure plus payload for every boundary operation.
//! - Serialize to the JSON shapes the renderer consumes.
//!
//! # Invariants
//! - A rejected or failed lookup serializes `contact` as `{}`.
//! - A lookup that found no row omits `contact` entirely.

use crate::model::contact::{Contact, ContactId};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub const MESSAGE_INSERTED: &str = "inserted";
pub const MESSAGE_INVALID_DATA: &str = "invalid data";

/// Result of a write operation (`register-contact`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
    /// Id assigned to the inserted row, when one was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<ContactId>,
}

impl ActionResponse {
    pub fn inserted(contact_id: ContactId) -> Self {
        Self {
            success: true,
            message: MESSAGE_INSERTED.to_string(),
            contact_id: Some(contact_id),
        }
    }

    pub fn invalid_data() -> Self {
        Self::failure(MESSAGE_INVALID_DATA)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            contact_id: None,
        }
    }
}

/// Result of `list-contacts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactListResponse {
    pub success: bool,
    pub contacts: Vec<Contact>,
}

impl ContactListResponse {
    pub fn ok(contacts: Vec<Contact>) -> Self {
        Self {
            success: true,
            contacts,
        }
    }

    pub fn failure() -> Self {
        Self {
            success: false,
            contacts: Vec::new(),
        }
    }
}

/// Payload slot of a by-id lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactSlot {
    /// Row exists.
    Found(Contact),
    /// Id was well-formed but names no row.
    Missing,
    /// Lookup was rejected or failed; serialized as `{}`.
    Empty,
}

impl ContactSlot {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn contact(&self) -> Option<&Contact> {
        match self {
            Self::Found(contact) => Some(contact),
            Self::Missing | Self::Empty => None,
        }
    }
}

impl Serialize for ContactSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Found(contact) => contact.serialize(serializer),
            Self::Missing => serializer.serialize_none(),
            Self::Empty => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

/// Result of `get-contact-by-id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLookupResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "ContactSlot::is_missing")]
    pub contact: ContactSlot,
}

impl ContactLookupResponse {
    pub fn found(contact: Option<Contact>) -> Self {
        Self {
            success: true,
            contact: contact.map_or(ContactSlot::Missing, ContactSlot::Found),
        }
    }

    pub fn rejected() -> Self {
        Self {
            success: false,
            contact: ContactSlot::Empty,
        }
    }
}
