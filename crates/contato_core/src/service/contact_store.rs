//! Contact store: schema lifecycle plus the three data operations.
//!
//! # Responsibility
//! - Own the single database handle for the process lifetime.
//! - Validate input, run repository calls, and convert every outcome into
//!   a response envelope.
//!
//! # Invariants
//! - Invalid input never reaches storage.
//! - Malformed lookup ids never reach storage.
//! - Storage errors are logged and returned as failed envelopes; no public
//!   operation returns `Err` or panics once the store is open.

use crate::db::schema::ensure_schema;
use crate::db::{open_db, open_db_in_memory, DbError, DbResult};
use crate::model::contact::{ContactId, NewContact};
use crate::model::response::{ActionResponse, ContactListResponse, ContactLookupResponse};
use crate::repo::contact_repo::{ContactRepository, RepoError, SqliteContactRepository};
use crate::validation::is_valid_contact_id;
use log::{debug, error, info, warn};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Store behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Logs SQL statements and returned rows at `debug`.
    ///
    /// Enabled only in development mode since rows carry personal data.
    pub diagnostics: bool,
}

/// Owner of the contact database handle.
pub struct ContactStore {
    conn: Connection,
    location: Option<PathBuf>,
    options: StoreOptions,
}

impl ContactStore {
    /// Opens (or creates) the database file and ensures the schema.
    pub fn open(path: impl AsRef<Path>, options: StoreOptions) -> DbResult<Self> {
        let path = path.as_ref();
        let conn = open_db(path)?;
        Ok(Self::from_connection(conn, Some(path.to_path_buf()), options))
    }

    /// Opens a throwaway in-memory store.
    pub fn open_in_memory(options: StoreOptions) -> DbResult<Self> {
        let conn = open_db_in_memory()?;
        Ok(Self::from_connection(conn, None, options))
    }

    fn from_connection(
        mut conn: Connection,
        location: Option<PathBuf>,
        options: StoreOptions,
    ) -> Self {
        if options.diagnostics {
            conn.trace(Some(trace_statement));
        }
        Self {
            conn,
            location,
            options,
        }
    }

    /// Database file backing this store, `None` when in memory.
    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    /// Creates the contact table if absent. Idempotent.
    pub fn ensure_schema(&self) -> DbResult<()> {
        ensure_schema(&self.conn)
    }

    /// Validates and inserts one contact.
    ///
    /// # Contract
    /// - Invalid fields: `{success:false, message:"invalid data"}`, no write.
    /// - Storage error: `{success:false, message:"insert failed: <detail>"}`.
    /// - Success: `{success:true, message:"inserted", contactId}`.
    pub fn insert(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        description: &str,
    ) -> ActionResponse {
        let contact = NewContact::new(name, email, phone, description);
        if let Err(err) = contact.validate() {
            warn!(
                "event=contact_insert module=store status=rejected field={} reason={}",
                err.field(),
                err
            );
            return ActionResponse::invalid_data();
        }

        match self.repo().insert_contact(&contact) {
            Ok(id) => {
                info!("event=contact_insert module=store status=ok contact_id={id}");
                ActionResponse::inserted(id)
            }
            Err(RepoError::Validation(_)) => ActionResponse::invalid_data(),
            Err(err) => {
                error!("event=contact_insert module=store status=error error={err}");
                ActionResponse::failure(format!("insert failed: {err}"))
            }
        }
    }

    /// Returns every contact ordered by id.
    pub fn list_all(&self) -> ContactListResponse {
        match self.repo().list_contacts() {
            Ok(contacts) => {
                info!(
                    "event=contact_list module=store status=ok count={}",
                    contacts.len()
                );
                if self.options.diagnostics {
                    debug!("event=contact_list module=store rows={contacts:?}");
                }
                ContactListResponse::ok(contacts)
            }
            Err(err) => {
                error!("event=contact_list module=store status=error error={err}");
                ContactListResponse::failure()
            }
        }
    }

    /// Looks a contact up by a decimal id string.
    ///
    /// Ids that are not purely ASCII digits are rejected without a query.
    pub fn get_by_id(&self, id: &str) -> ContactLookupResponse {
        if !is_valid_contact_id(id) {
            warn!("event=contact_get module=store status=rejected reason=malformed_id");
            return ContactLookupResponse::rejected();
        }

        // Digit runs past i64::MAX cannot match an AUTOINCREMENT rowid.
        let Ok(id) = id.parse::<ContactId>() else {
            info!("event=contact_get module=store status=ok found=false reason=id_out_of_range");
            return ContactLookupResponse::found(None);
        };

        match self.repo().get_contact(id) {
            Ok(contact) => {
                info!(
                    "event=contact_get module=store status=ok contact_id={id} found={}",
                    contact.is_some()
                );
                if self.options.diagnostics {
                    debug!("event=contact_get module=store row={contact:?}");
                }
                ContactLookupResponse::found(contact)
            }
            Err(err) => {
                error!("event=contact_get module=store status=error contact_id={id} error={err}");
                ContactLookupResponse::rejected()
            }
        }
    }

    /// Closes the database handle.
    pub fn close(self) -> DbResult<()> {
        match self.conn.close() {
            Ok(()) => {
                info!("event=db_close module=store status=ok");
                Ok(())
            }
            Err((_, err)) => {
                error!("event=db_close module=store status=error error={err}");
                Err(DbError::Sqlite(err))
            }
        }
    }

    fn repo(&self) -> SqliteContactRepository<'_> {
        SqliteContactRepository::new(&self.conn)
    }
}

fn trace_statement(sql: &str) {
    debug!("event=sql_trace module=store sql={}", sql.replace(['\n', '\r'], " "));
}
