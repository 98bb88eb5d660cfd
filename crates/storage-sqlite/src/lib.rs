//! SQLite storage implementation for Fintrack.
//!
//! This is the only crate in the workspace that talks to SQLite. It
//! implements the snapshot repository trait defined in `fintrack-core` on
//! top of a two-slot key-value table, so the persisted layout stays two
//! independent JSON arrays under stable keys.
//!
//! ```text
//! core (domain)
//!       |
//!       v
//! storage-sqlite (this crate)
//!       |
//!       v
//!   SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod ledger;

// Re-export database utilities
pub use db::establish_connection;

// Re-export storage errors and repository
pub use errors::StorageError;
pub use ledger::SqliteLedgerRepository;

// Re-export from fintrack-core for convenience
pub use fintrack_core::errors::{DatabaseError, Error, Result};
