//! `Contato` table definition.

use super::DbResult;
use rusqlite::Connection;

/// Name of the single contact table.
pub const CONTACT_TABLE: &str = "Contato";

const CONTACT_SCHEMA_SQL: &str = include_str!("schema.sql");

/// Creates the contact table if absent.
///
/// Safe to call on every startup; existing rows are never touched.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(CONTACT_SCHEMA_SQL)?;
    Ok(())
}

/// Returns whether the contact table is present.
pub fn contact_table_exists(conn: &Connection) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [CONTACT_TABLE],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
