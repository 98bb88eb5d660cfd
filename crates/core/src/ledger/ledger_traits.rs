//! Ledger repository and service traits.
//!
//! These traits define the contract for ledger operations without any
//! storage-specific types, allowing for different persistence backends.

use super::ledger_model::{NewTransaction, Transaction};
use crate::errors::Result;
use crate::investments::{Investment, NewInvestment};

/// Persistence contract for ledger snapshots.
///
/// The ledger persists its complete state after every mutation. The two
/// collections live in independent slots (see the slot key constants in
/// this module) so either can be rewritten on its own.
///
/// Implementations must treat a missing or unreadable slot as an empty
/// collection rather than an error: a corrupt store degrades to a fresh
/// ledger instead of refusing to start.
pub trait LedgerSnapshotRepositoryTrait: Send + Sync {
    /// Loads the investment collection from its slot.
    fn load_investments(&self) -> Result<Vec<Investment>>;

    /// Loads the transaction collection from its slot.
    fn load_transactions(&self) -> Result<Vec<Transaction>>;

    /// Overwrites the investment slot with the full collection.
    fn save_investments(&self, investments: &[Investment]) -> Result<()>;

    /// Overwrites the transaction slot with the full collection.
    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()>;
}

/// Contract for the ledger store, the sole authority over investments and
/// transactions. No other component may construct or mutate either
/// collection directly.
pub trait LedgerServiceTrait: Send + Sync {
    /// Creates a new investment from a draft the caller has already
    /// validated. The ledger itself does not re-validate.
    fn add_investment(&self, new_investment: NewInvestment) -> Result<Investment>;

    /// Records a deposit or withdrawal against an existing investment,
    /// updating its balance and the transaction's `newBalance` in the same
    /// state update.
    fn record_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    /// Retrieves one investment by id.
    fn get_investment(&self, investment_id: &str) -> Result<Investment>;

    /// All investments, in creation order.
    fn get_investments(&self) -> Result<Vec<Investment>>;

    /// All transactions, in recording order.
    fn get_transactions(&self) -> Result<Vec<Transaction>>;

    /// Transactions recorded against one investment, in recording order.
    fn get_investment_transactions(&self, investment_id: &str) -> Result<Vec<Transaction>>;

    /// Replaces both collections wholesale (import/restore). Supplied
    /// balances are trusted; nothing is re-derived.
    fn replace_all(
        &self,
        investments: Vec<Investment>,
        transactions: Vec<Transaction>,
    ) -> Result<()>;
}
