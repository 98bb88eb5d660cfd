//! In-memory snapshot repository for tests and ephemeral ledgers.

use std::sync::RwLock;

use super::ledger_traits::LedgerSnapshotRepositoryTrait;
use crate::errors::Result;
use crate::investments::Investment;
use crate::ledger::Transaction;

/// Keeps both slots in memory. Useful as a test double and for callers that
/// want a ledger without a database file.
#[derive(Default)]
pub struct InMemoryLedgerRepository {
    investments: RwLock<Vec<Investment>>,
    transactions: RwLock<Vec<Transaction>>,
}

impl InMemoryLedgerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerSnapshotRepositoryTrait for InMemoryLedgerRepository {
    fn load_investments(&self) -> Result<Vec<Investment>> {
        Ok(self.investments.read().unwrap().clone())
    }

    fn load_transactions(&self) -> Result<Vec<Transaction>> {
        Ok(self.transactions.read().unwrap().clone())
    }

    fn save_investments(&self, investments: &[Investment]) -> Result<()> {
        *self.investments.write().unwrap() = investments.to_vec();
        Ok(())
    }

    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        *self.transactions.write().unwrap() = transactions.to_vec();
        Ok(())
    }
}
