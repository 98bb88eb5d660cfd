//! Domain event types.

use serde::{Deserialize, Serialize};

/// Events emitted by the ledger after successful mutations.
///
/// These represent facts about ledger data changes. Consumers (a UI layer,
/// a sync adapter) subscribe through a [`super::DomainEventSink`] instead of
/// watching shared state.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// Investments were created.
    InvestmentsChanged { investment_ids: Vec<String> },

    /// Transactions were recorded; balances moved on the named investments.
    TransactionsRecorded { investment_ids: Vec<String> },

    /// The whole ledger was swapped out by an import or restore.
    LedgerReplaced {
        investment_count: usize,
        transaction_count: usize,
    },
}

impl DomainEvent {
    pub fn investments_changed(investment_ids: Vec<String>) -> Self {
        Self::InvestmentsChanged { investment_ids }
    }

    pub fn transactions_recorded(investment_ids: Vec<String>) -> Self {
        Self::TransactionsRecorded { investment_ids }
    }

    pub fn ledger_replaced(investment_count: usize, transaction_count: usize) -> Self {
        Self::LedgerReplaced {
            investment_count,
            transaction_count,
        }
    }
}
