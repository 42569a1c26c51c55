//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `contato_core` linkage and store bootstrap outside the GUI.
//! - Keep output deterministic for quick local sanity checks.

use contato_core::{AppConfig, ContactStore, StoreOptions};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = AppConfig::from_env();
    println!("contato_core ping={}", contato_core::ping());
    println!("contato_core version={}", contato_core::core_version());
    println!("sqlite version={}", contato_core::sqlite_version());
    println!("mode={}", config.mode.as_str());
    println!("db_path={}", config.db_path.display());

    let options = StoreOptions {
        diagnostics: config.mode.is_development(),
    };
    let store = match ContactStore::open(&config.db_path, options) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("store open failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    let listed = store.list_all();
    println!(
        "contacts success={} count={}",
        listed.success,
        listed.contacts.len()
    );

    if let Err(err) = store.close() {
        eprintln!("store close failed: {err}");
        return ExitCode::FAILURE;
    }
    if listed.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
