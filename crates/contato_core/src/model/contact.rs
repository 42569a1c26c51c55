//! Contact domain model.
//!
//! # Responsibility
//! - Define the persisted contact record and its pre-insert shape.
//! - Map field-level validation failures to typed errors.
//!
//! # Invariants
//! - `id` is assigned by storage, positive, and never reused.
//! - A `NewContact` is persisted only when `validate()` succeeds.
//! - Contacts are never updated or deleted after insert.

use crate::validation::{
    is_valid_description, is_valid_email, is_valid_mobile_phone, is_valid_name, MAX_PHONE_CHARS,
};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned contact identifier (`Contato.id`).
pub type ContactId = i64;

/// Persisted contact row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub description: String,
}

/// User-supplied contact fields before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub description: String,
}

impl NewContact {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            description: description.into(),
        }
    }

    /// Checks every field constraint, reporting the first one that fails.
    ///
    /// Fields are checked in declaration order: name, email, phone,
    /// description.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if !is_valid_name(&self.name) {
            return Err(ContactValidationError::NameLength {
                chars: self.name.chars().count(),
            });
        }
        if !is_valid_email(&self.email) {
            return Err(ContactValidationError::InvalidEmail);
        }
        let phone_chars = self.phone.chars().count();
        if phone_chars > MAX_PHONE_CHARS {
            return Err(ContactValidationError::PhoneTooLong { chars: phone_chars });
        }
        if !is_valid_mobile_phone(&self.phone) {
            return Err(ContactValidationError::InvalidPhone);
        }
        if !is_valid_description(&self.description) {
            return Err(ContactValidationError::DescriptionTooLong {
                chars: self.description.chars().count(),
            });
        }
        Ok(())
    }

    /// Attaches a storage-assigned id.
    pub fn into_contact(self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            description: self.description,
        }
    }
}

/// Field constraint violated by a `NewContact`.
///
/// Display output names the field but never echoes its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactValidationError {
    NameLength { chars: usize },
    InvalidEmail,
    InvalidPhone,
    PhoneTooLong { chars: usize },
    DescriptionTooLong { chars: usize },
}

impl ContactValidationError {
    /// Field name used in log events.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NameLength { .. } => "name",
            Self::InvalidEmail => "email",
            Self::InvalidPhone | Self::PhoneTooLong { .. } => "phone",
            Self::DescriptionTooLong { .. } => "description",
        }
    }
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameLength { chars } => {
                write!(f, "name must be 3..=255 characters, got {chars}")
            }
            Self::InvalidEmail => write!(f, "email is not a valid address"),
            Self::InvalidPhone => write!(f, "phone is not a valid mobile number"),
            Self::PhoneTooLong { chars } => {
                write!(f, "phone must be at most 30 characters, got {chars}")
            }
            Self::DescriptionTooLong { chars } => {
                write!(f, "description must be at most 50 characters, got {chars}")
            }
        }
    }
}

impl Error for ContactValidationError {}
