//! Shared state handed to every handler.

use std::path::PathBuf;
use std::sync::Arc;

use rusqlite::Connection;

use crate::api::error::ApiError;
use crate::db;

/// Context cloned into each request.
///
/// Holds the database path rather than a connection: handlers open a
/// connection per request, which keeps the context `Send + Sync` without
/// wrapping SQLite in a mutex.
#[derive(Clone)]
pub struct ApiContext {
    db_path: Arc<PathBuf>,
}

impl ApiContext {
    pub fn new(db_path: PathBuf) -> Self {
        Self {
            db_path: Arc::new(db_path),
        }
    }

    /// Open the service database for the current request.
    ///
    /// Migrations ran at startup; the version check on reopen is a no-op.
    pub fn open_db(&self) -> Result<Connection, ApiError> {
        Ok(db::open_database(&self.db_path)?)
    }
}
