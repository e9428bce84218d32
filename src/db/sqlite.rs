//! SQLite bootstrap: connection setup, pragmas, and schema migrations.

use std::path::Path;

use rusqlite::Connection;

use super::DatabaseError;

/// Ordered schema migrations. Each entry runs at most once per database.
const MIGRATIONS: &[(i64, &str)] = &[
    (1, include_str!("../../resources/migrations/001_initial.sql")),
];

/// Open (or create) the database file at `path`, ready for queries.
pub fn open_database(path: &Path) -> Result<Connection, DatabaseError> {
    initialize(Connection::open(path)?)
}

/// In-memory database with the full schema, for tests.
pub fn open_memory_database() -> Result<Connection, DatabaseError> {
    initialize(Connection::open_in_memory()?)
}

fn initialize(conn: Connection) -> Result<Connection, DatabaseError> {
    conn.execute_batch("PRAGMA journal_mode=DELETE; PRAGMA foreign_keys=ON;")?;
    run_migrations(&conn)?;
    Ok(conn)
}

/// Apply every migration newer than the database's recorded version.
pub fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    let applied = schema_version(conn);
    for &(version, sql) in MIGRATIONS.iter().filter(|(v, _)| *v > applied) {
        tracing::info!(version, "Applying schema migration");
        conn.execute_batch(sql).map_err(|err| DatabaseError::MigrationFailed {
            version,
            reason: err.to_string(),
        })?;
    }
    Ok(())
}

// 0 when the schema_version table is missing or empty (fresh database).
fn schema_version(conn: &Connection) -> i64 {
    conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
        .unwrap_or(0)
}
