//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Own the process-wide `ContactApp` between `init_app` and
//!   `shutdown_app`.
//! - Expose the contact operations (production) or the diagnostics
//!   surface (development) to Dart via FRB.
//! - Expose the shell's window and navigation policy.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Calls are serialized through one mutex; at most one store is open.

use crate::shell::{decide_navigation, NavigationKind, NavigationVerdict, WindowSpec};
use contato_core::{
    core_version as core_version_inner, default_log_level, init_logging as init_logging_inner,
    ping as ping_inner, sqlite_version, AppConfig, AppMode, CommandRouter, Contact, ContactStore,
    ExposedSurface, StoreOptions,
};
use log::info;
use std::path::PathBuf;
use std::sync::Mutex;

static APP: ContactApp = ContactApp::new();

struct AppState {
    config: AppConfig,
    store: ContactStore,
}

/// Store lifecycle plus mode gating behind the exported functions.
///
/// The FFI functions delegate to one static instance.
pub struct ContactApp {
    state: Mutex<Option<AppState>>,
}

impl Default for ContactApp {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactApp {
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(None),
        }
    }

    /// Opens the store; idempotent for the same configuration.
    pub fn init(&self, config: AppConfig) -> Result<(), String> {
        let mut guard = self
            .state
            .lock()
            .map_err(|_| "app state lock poisoned".to_string())?;

        if let Some(state) = guard.as_ref() {
            if state.config == config {
                return Ok(());
            }
            return Err(format!(
                "app already initialized with {} mode at `{}`; refusing to switch to {} mode at `{}`",
                state.config.mode.as_str(),
                state.config.db_path.display(),
                config.mode.as_str(),
                config.db_path.display()
            ));
        }

        let options = StoreOptions {
            diagnostics: config.mode.is_development(),
        };
        let store = ContactStore::open(&config.db_path, options)
            .map_err(|err| format!("init_app failed: {err}"))?;
        info!(
            "event=app_init module=ffi status=ok mode={}",
            config.mode.as_str()
        );
        *guard = Some(AppState { config, store });
        Ok(())
    }

    /// Closes the store if open. Closing an idle app is a no-op.
    pub fn shutdown(&self) -> Result<(), String> {
        let mut guard = self
            .state
            .lock()
            .map_err(|_| "app state lock poisoned".to_string())?;
        let Some(state) = guard.take() else {
            return Ok(());
        };
        state
            .store
            .close()
            .map_err(|err| format!("shutdown_app failed: {err}"))?;
        info!("event=app_shutdown module=ffi status=ok");
        Ok(())
    }

    /// Mode of the open store, or the environment's mode when idle.
    pub fn mode(&self) -> AppMode {
        match self.state.lock() {
            Ok(guard) => guard
                .as_ref()
                .map_or_else(AppMode::from_env, |state| state.config.mode),
            Err(_) => AppMode::from_env(),
        }
    }

    pub fn register_contact(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        description: &str,
    ) -> ContactActionReply {
        match self.with_router(|router| router.register_contact(name, email, phone, description)) {
            Ok(response) => ContactActionReply {
                success: response.success,
                message: response.message,
                contact_id: response.contact_id,
            },
            Err(message) => ContactActionReply {
                success: false,
                message,
                contact_id: None,
            },
        }
    }

    pub fn list_contacts(&self) -> ContactListReply {
        match self.with_router(|router| router.list_contacts()) {
            Ok(response) => ContactListReply {
                success: response.success,
                contacts: response.contacts.into_iter().map(to_contact_item).collect(),
                message: String::new(),
            },
            Err(message) => ContactListReply {
                success: false,
                contacts: Vec::new(),
                message,
            },
        }
    }

    pub fn get_contact_by_id(&self, id: &str) -> ContactLookupReply {
        match self.with_router(|router| router.get_contact_by_id(id)) {
            Ok(response) => ContactLookupReply {
                success: response.success,
                contact: response.contact.contact().cloned().map(to_contact_item),
                message: String::new(),
            },
            Err(message) => ContactLookupReply {
                success: false,
                contact: None,
                message,
            },
        }
    }

    pub fn get_contact_by_number(&self, id: i64) -> ContactLookupReply {
        self.get_contact_by_id(&id.to_string())
    }

    pub fn diagnostics_versions(&self) -> Option<DiagnosticsVersions> {
        diagnostics_versions_for(self.mode())
    }

    fn with_router<T>(&self, f: impl FnOnce(&CommandRouter<'_>) -> T) -> Result<T, String> {
        let guard = self
            .state
            .lock()
            .map_err(|_| "app state lock poisoned".to_string())?;
        let state = guard
            .as_ref()
            .ok_or_else(|| "app not initialized; call init_app first".to_string())?;
        if let Some(message) = surface_error(state.config.mode) {
            return Err(message);
        }
        let router = CommandRouter::new(&state.store);
        Ok(f(&router))
    }
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive); blank
///   selects the default for the current mode.
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let level = if level.trim().is_empty() {
        default_log_level(APP.mode())
    } else {
        level.as_str()
    };
    match init_logging_inner(level, log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Opens the contact store for this process.
///
/// Input semantics:
/// - `db_path`: database file; falls back to `CONTATO_DB_PATH`, then
///   `./database/sqlite3.db`.
/// - `mode`: `development|production`; falls back to `CONTATO_ENV`.
///
/// # FFI contract
/// - Idempotent for the same resolved configuration.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_app(db_path: Option<String>, mode: Option<String>) -> String {
    match APP.init(resolve_config(db_path, mode)) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Closes the contact store; later contact calls fail until `init_app`.
///
/// Returns empty string on success (including when nothing was open).
#[flutter_rust_bridge::frb(sync)]
pub fn shutdown_app() -> String {
    APP.shutdown().err().unwrap_or_default()
}

/// Contact row as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactItem {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub description: String,
}

/// Reply to `register_contact`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactActionReply {
    pub success: bool,
    pub message: String,
    /// Assigned id when a row was written.
    pub contact_id: Option<i64>,
}

/// Reply to `list_contacts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactListReply {
    pub success: bool,
    pub contacts: Vec<ContactItem>,
    /// Empty on success; explains boundary-level failures.
    pub message: String,
}

/// Reply to `get_contact_by_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLookupReply {
    pub success: bool,
    /// `None` when rejected, failed, or no row has this id.
    pub contact: Option<ContactItem>,
    /// Empty unless the call never reached the store.
    pub message: String,
}

/// Runtime versions shown by the development diagnostics page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsVersions {
    pub core: String,
    pub sqlite: String,
    pub platform: String,
}

/// `register-contact`: validates and inserts one contact.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn register_contact(
    name: String,
    email: String,
    phone: String,
    description: String,
) -> ContactActionReply {
    APP.register_contact(&name, &email, &phone, &description)
}

/// `list-contacts`: every stored contact ordered by id.
#[flutter_rust_bridge::frb(sync)]
pub fn list_contacts() -> ContactListReply {
    APP.list_contacts()
}

/// `get-contact-by-id`: lookup by decimal id string.
///
/// Ids with any non-digit character are rejected without a query.
#[flutter_rust_bridge::frb(sync)]
pub fn get_contact_by_id(id: String) -> ContactLookupReply {
    APP.get_contact_by_id(&id)
}

/// Numeric form of `get_contact_by_id`; negative ids are rejected.
#[flutter_rust_bridge::frb(sync)]
pub fn get_contact_by_number(id: i64) -> ContactLookupReply {
    APP.get_contact_by_number(id)
}

/// Versions for the diagnostics page; `None` outside development mode.
#[flutter_rust_bridge::frb(sync)]
pub fn diagnostics_versions() -> Option<DiagnosticsVersions> {
    APP.diagnostics_versions()
}

/// Window parameters for the shell.
#[flutter_rust_bridge::frb(sync)]
pub fn shell_window_spec() -> WindowSpec {
    WindowSpec::default()
}

/// Navigation decision for a renderer request; always a veto.
#[flutter_rust_bridge::frb(sync)]
pub fn shell_navigation_verdict(kind: NavigationKind, url: String) -> NavigationVerdict {
    decide_navigation(APP.mode(), kind, &url)
}

fn resolve_config(db_path: Option<String>, mode: Option<String>) -> AppConfig {
    let mut config = AppConfig::from_env();
    if let Some(mode) = mode {
        config.mode = AppMode::parse(Some(mode.as_str()));
    }
    if let Some(path) = db_path.map(|raw| raw.trim().to_string()) {
        if !path.is_empty() {
            config.db_path = PathBuf::from(path);
        }
    }
    config
}

fn diagnostics_versions_for(mode: AppMode) -> Option<DiagnosticsVersions> {
    if mode.exposed_surface() != ExposedSurface::Diagnostics {
        return None;
    }
    Some(DiagnosticsVersions {
        core: core_version_inner().to_owned(),
        sqlite: sqlite_version().to_owned(),
        platform: std::env::consts::OS.to_owned(),
    })
}

fn surface_error(mode: AppMode) -> Option<String> {
    match mode.exposed_surface() {
        ExposedSurface::Contacts => None,
        ExposedSurface::Diagnostics => {
            Some("contact operations are not exposed in development mode".to_string())
        }
    }
}

fn to_contact_item(contact: Contact) -> ContactItem {
    ContactItem {
        id: contact.id,
        name: contact.name,
        email: contact.email,
        phone: contact.phone,
        description: contact.description,
    }
}
