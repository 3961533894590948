//! SQLite store for the hospital dashboard.

mod schema;
mod seed;

mod ambulance;
mod appointments;
mod beds;
mod billing;
mod blood_bank;
mod departments;
mod doctors;
mod inventory;
mod lab_tests;
mod patients;
mod pharmacy;
mod records;
mod staff;

mod reports;
mod stats;

pub use schema::SCHEMA;

pub use ambulance::*;
pub use appointments::*;
pub use beds::*;
pub use billing::*;
pub use blood_bank::*;
pub use doctors::*;
pub use lab_tests::*;
pub use pharmacy::*;
pub use records::*;
pub use reports::*;
pub use staff::*;
pub use stats::*;

use std::path::Path;

use rusqlite::Connection;
use thiserror::Error;

/// Database errors.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("schema error: {0}")]
    Schema(String),

    #[error("record not found: {0}")]
    NotFound(String),

    #[error("constraint violation: {0}")]
    Constraint(String),
}

pub type DbResult<T> = Result<T, DbError>;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the store at `path`, creating it if needed.
    ///
    /// Recovery from a corrupt file is destructive: the file is deleted and
    /// the schema recreated from scratch.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let path = path.as_ref();
        let conn = match probe(path) {
            Ok(conn) => conn,
            Err(_) => {
                tracing::warn!(path = %path.display(), "store unreadable, recreating");
                if path.exists() {
                    std::fs::remove_file(path).map_err(|e| DbError::Schema(e.to_string()))?;
                }
                probe(path)?
            }
        };
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Create an in-memory store (for testing).
    pub fn open_in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Idempotently ensure all entity tables exist.
    fn initialize(&self) -> DbResult<()> {
        self.conn
            .execute_batch(SCHEMA)
            .map_err(|e| DbError::Schema(e.to_string()))
    }

    /// Get the raw connection (for ad-hoc queries).
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Count rows via a `SELECT COUNT(*)`-shaped query.
    pub(crate) fn count(&self, sql: &str) -> DbResult<i64> {
        Ok(self.conn.query_row(sql, [], |row| row.get(0))?)
    }
}

/// Open `path` and check the file is actually a readable database.
/// `schema_version` forces a header read; a statement touching no table
/// would leave a non-database file undetected.
fn probe(path: &Path) -> DbResult<Connection> {
    let conn = Connection::open(path)?;
    conn.query_row("PRAGMA schema_version", [], |_| Ok(()))?;
    Ok(conn)
}

/// Map write failures, surfacing SQLite constraint violations as
/// [`DbError::Constraint`].
pub(crate) fn write_err(e: rusqlite::Error) -> DbError {
    match &e {
        rusqlite::Error::SqliteFailure(failure, message)
            if failure.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            DbError::Constraint(
                message
                    .clone()
                    .unwrap_or_else(|| "foreign key or column constraint failed".to_string()),
            )
        }
        _ => DbError::Sqlite(e),
    }
}
