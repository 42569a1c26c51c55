//! Runtime configuration resolved from the process environment.
//!
//! # Responsibility
//! - Decide development vs production mode.
//! - Resolve the database file location.
//!
//! # Invariants
//! - Missing or unknown values fall back to production defaults.
//! - Resolution never fails and never panics.

use std::path::PathBuf;

/// Selects `development` or `production` mode.
pub const ENV_MODE: &str = "CONTATO_ENV";
/// Overrides the database file path when set and non-empty.
pub const ENV_DB_PATH: &str = "CONTATO_DB_PATH";

const DEFAULT_DB_DIR: &str = "database";
const DEFAULT_DB_FILE_NAME: &str = "sqlite3.db";

/// Process-wide run mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Diagnostic logging on; only the diagnostics surface is exposed.
    Development,
    /// Contact operations exposed; diagnostics hidden.
    Production,
}

/// Operation set exposed to the renderer for a given mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExposedSurface {
    Diagnostics,
    Contacts,
}

impl AppMode {
    /// Parses a raw mode value; only `development` selects development.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.trim().eq_ignore_ascii_case("development") => Self::Development,
            _ => Self::Production,
        }
    }

    pub fn from_env() -> Self {
        Self::parse(std::env::var(ENV_MODE).ok().as_deref())
    }

    pub fn is_development(self) -> bool {
        self == Self::Development
    }

    pub fn exposed_surface(self) -> ExposedSurface {
        match self {
            Self::Development => ExposedSurface::Diagnostics,
            Self::Production => ExposedSurface::Contacts,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: AppMode,
    pub db_path: PathBuf,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mode = AppMode::parse(lookup(ENV_MODE).as_deref());
        let db_path = lookup(ENV_DB_PATH)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_db_path);
        Self { mode, db_path }
    }
}

/// `./database/sqlite3.db`, relative to the working directory.
pub fn default_db_path() -> PathBuf {
    PathBuf::from(".")
        .join(DEFAULT_DB_DIR)
        .join(DEFAULT_DB_FILE_NAME)
}
