//! Command router between the UI process and the contact store.
//!
//! # Responsibility
//! - Map the three named remote operations 1:1 onto store calls.
//! - Marshal positional string arguments for channel-based callers.
//!
//! # Invariants
//! - No business logic here; replies are the store's envelopes unchanged.
//! - The router borrows the store and never owns or opens a connection.

use crate::model::response::{ActionResponse, ContactListResponse, ContactLookupResponse};
use crate::service::contact_store::ContactStore;
use log::debug;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const CHANNEL_REGISTER_CONTACT: &str = "register-contact";
pub const CHANNEL_LIST_CONTACTS: &str = "list-contacts";
pub const CHANNEL_GET_CONTACT_BY_ID: &str = "get-contact-by-id";

/// All channels the router answers, in registration order.
pub const CHANNELS: [&str; 3] = [
    CHANNEL_REGISTER_CONTACT,
    CHANNEL_LIST_CONTACTS,
    CHANNEL_GET_CONTACT_BY_ID,
];

/// One request from the UI process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    RegisterContact {
        name: String,
        email: String,
        phone: String,
        description: String,
    },
    ListContacts,
    GetContactById {
        id: String,
    },
}

impl Command {
    /// Builds a command from a channel name and positional arguments.
    pub fn from_channel(channel: &str, args: &[String]) -> Result<Self, RouterError> {
        match channel {
            CHANNEL_REGISTER_CONTACT => {
                let [name, email, phone, description] =
                    expect_args::<4>(CHANNEL_REGISTER_CONTACT, args)?;
                Ok(Self::RegisterContact {
                    name,
                    email,
                    phone,
                    description,
                })
            }
            CHANNEL_LIST_CONTACTS => {
                expect_args::<0>(CHANNEL_LIST_CONTACTS, args)?;
                Ok(Self::ListContacts)
            }
            CHANNEL_GET_CONTACT_BY_ID => {
                let [id] = expect_args::<1>(CHANNEL_GET_CONTACT_BY_ID, args)?;
                Ok(Self::GetContactById { id })
            }
            other => Err(RouterError::UnknownChannel(other.to_string())),
        }
    }

    pub fn channel(&self) -> &'static str {
        match self {
            Self::RegisterContact { .. } => CHANNEL_REGISTER_CONTACT,
            Self::ListContacts => CHANNEL_LIST_CONTACTS,
            Self::GetContactById { .. } => CHANNEL_GET_CONTACT_BY_ID,
        }
    }
}

/// Reply to one `Command`; serializes as the inner envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommandReply {
    Action(ActionResponse),
    List(ContactListResponse),
    Lookup(ContactLookupResponse),
}

/// Channel-level failure; raised only for caller bugs, never for data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    UnknownChannel(String),
    ArgumentCount {
        channel: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl Display for RouterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownChannel(channel) => write!(f, "unknown channel `{channel}`"),
            Self::ArgumentCount {
                channel,
                expected,
                actual,
            } => write!(
                f,
                "channel `{channel}` expects {expected} argument(s), got {actual}"
            ),
        }
    }
}

impl Error for RouterError {}

/// Dispatches UI requests to a borrowed `ContactStore`.
pub struct CommandRouter<'store> {
    store: &'store ContactStore,
}

impl<'store> CommandRouter<'store> {
    pub fn new(store: &'store ContactStore) -> Self {
        Self { store }
    }

    pub fn register_contact(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        description: &str,
    ) -> ActionResponse {
        self.store.insert(name, email, phone, description)
    }

    pub fn list_contacts(&self) -> ContactListResponse {
        self.store.list_all()
    }

    pub fn get_contact_by_id(&self, id: &str) -> ContactLookupResponse {
        self.store.get_by_id(id)
    }

    pub fn dispatch(&self, command: &Command) -> CommandReply {
        debug!(
            "event=command_dispatch module=router channel={}",
            command.channel()
        );
        match command {
            Command::RegisterContact {
                name,
                email,
                phone,
                description,
            } => CommandReply::Action(self.register_contact(name, email, phone, description)),
            Command::ListContacts => CommandReply::List(self.list_contacts()),
            Command::GetContactById { id } => CommandReply::Lookup(self.get_contact_by_id(id)),
        }
    }

    /// Parses and dispatches a channel invocation.
    pub fn invoke(&self, channel: &str, args: &[String]) -> Result<CommandReply, RouterError> {
        let command = Command::from_channel(channel, args)?;
        Ok(self.dispatch(&command))
    }
}

fn expect_args<const N: usize>(
    channel: &'static str,
    args: &[String],
) -> Result<[String; N], RouterError> {
    <[String; N]>::try_from(args.to_vec()).map_err(|_| RouterError::ArgumentCount {
        channel,
        expected: N,
        actual: args.len(),
    })
}
