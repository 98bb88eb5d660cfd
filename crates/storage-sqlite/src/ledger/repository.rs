//! Snapshot repository backed by the `ledger_state` key-value table.
//!
//! Each collection is stored as one JSON array in its own slot row, keyed
//! `"investments"` and `"transactions"`. Writes replace the whole slot.

use std::sync::Mutex;

use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::StorageError;
use fintrack_core::investments::Investment;
use fintrack_core::ledger::{
    LedgerSnapshotRepositoryTrait, Transaction, INVESTMENTS_SLOT, TRANSACTIONS_SLOT,
};
use fintrack_core::Result;

pub struct SqliteLedgerRepository {
    connection: Mutex<Connection>,
}

impl SqliteLedgerRepository {
    pub fn new(connection: Connection) -> Self {
        Self {
            connection: Mutex::new(connection),
        }
    }

    fn read_slot(&self, slot_key: &str) -> Result<Option<String>> {
        let connection = self.connection.lock().unwrap();
        let value = connection
            .query_row(
                "SELECT slot_value FROM ledger_state WHERE slot_key = ?1",
                params![slot_key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(StorageError::from)?;
        Ok(value)
    }

    fn write_slot(&self, slot_key: &str, slot_value: &str) -> Result<()> {
        let connection = self.connection.lock().unwrap();
        connection
            .execute(
                "INSERT INTO ledger_state (slot_key, slot_value) VALUES (?1, ?2)
                 ON CONFLICT(slot_key) DO UPDATE SET slot_value = excluded.slot_value",
                params![slot_key, slot_value],
            )
            .map_err(StorageError::from)?;
        Ok(())
    }

    fn load_collection<T: DeserializeOwned>(&self, slot_key: &str) -> Result<Vec<T>> {
        let Some(raw) = self.read_slot(slot_key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(collection) => Ok(collection),
            Err(err) => {
                // A corrupt slot degrades to an empty collection.
                warn!(
                    "Slot '{}' failed to parse ({}); starting from an empty collection",
                    slot_key, err
                );
                Ok(Vec::new())
            }
        }
    }

    fn save_collection<T: Serialize>(&self, slot_key: &str, collection: &[T]) -> Result<()> {
        let serialized = serde_json::to_string(collection).map_err(StorageError::from)?;
        self.write_slot(slot_key, &serialized)
    }
}

impl LedgerSnapshotRepositoryTrait for SqliteLedgerRepository {
    fn load_investments(&self) -> Result<Vec<Investment>> {
        self.load_collection(INVESTMENTS_SLOT)
    }

    fn load_transactions(&self) -> Result<Vec<Transaction>> {
        self.load_collection(TRANSACTIONS_SLOT)
    }

    fn save_investments(&self, investments: &[Investment]) -> Result<()> {
        self.save_collection(INVESTMENTS_SLOT, investments)
    }

    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        self.save_collection(TRANSACTIONS_SLOT, transactions)
    }
}
