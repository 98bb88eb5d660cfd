//! Connection management and schema bootstrap.

use rusqlite::Connection;

use crate::errors::StorageError;
use fintrack_core::Result;

const INIT_SQL: &str = "
CREATE TABLE IF NOT EXISTS ledger_state (
    slot_key   TEXT PRIMARY KEY NOT NULL,
    slot_value TEXT NOT NULL
);
";

/// Opens (creating if needed) the database file, switches on WAL
/// journaling, and prepares the slot table.
pub fn establish_connection(db_path: &str) -> Result<Connection> {
    let connection = Connection::open(db_path)
        .map_err(|err| StorageError::ConnectionFailed(err.to_string()))?;
    connection
        .pragma_update(None, "journal_mode", "WAL")
        .map_err(StorageError::from)?;
    connection.execute_batch(INIT_SQL).map_err(StorageError::from)?;
    Ok(connection)
}
