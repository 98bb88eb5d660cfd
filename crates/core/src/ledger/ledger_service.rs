use std::sync::{Arc, RwLock};

use chrono::Utc;
use log::debug;
use uuid::Uuid;

use super::ledger_errors::LedgerError;
use super::ledger_model::{NewTransaction, Transaction};
use super::ledger_traits::{LedgerServiceTrait, LedgerSnapshotRepositoryTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::investments::{Investment, NewInvestment};

#[derive(Default)]
struct LedgerState {
    investments: Vec<Investment>,
    transactions: Vec<Transaction>,
}

/// The ledger store.
///
/// Holds both collections in memory and writes them through the snapshot
/// repository after every mutation. If a persistence write fails the
/// in-memory change is rolled back, so callers observe all-or-nothing.
/// The two slots are written one after the other; there is no cross-slot
/// transaction (last write wins).
pub struct LedgerService {
    repository: Arc<dyn LedgerSnapshotRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
    state: RwLock<LedgerState>,
}

impl LedgerService {
    /// Builds the service and rehydrates state from the snapshot slots.
    pub fn new(
        repository: Arc<dyn LedgerSnapshotRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Result<Self> {
        let investments = repository.load_investments()?;
        let transactions = repository.load_transactions()?;
        debug!(
            "Ledger rehydrated: {} investments, {} transactions",
            investments.len(),
            transactions.len()
        );

        Ok(Self {
            repository,
            event_sink,
            state: RwLock::new(LedgerState {
                investments,
                transactions,
            }),
        })
    }
}

impl LedgerServiceTrait for LedgerService {
    fn add_investment(&self, new_investment: NewInvestment) -> Result<Investment> {
        let investment = Investment {
            id: Uuid::new_v4().to_string(),
            name: new_investment.name,
            investment_type: new_investment.investment_type,
            initial_balance: new_investment.initial_balance,
            current_balance: new_investment.initial_balance,
            description: new_investment.description,
            created_at: Utc::now(),
        };

        let mut state = self.state.write().unwrap();
        state.investments.push(investment.clone());
        if let Err(err) = self.repository.save_investments(&state.investments) {
            state.investments.pop();
            return Err(err);
        }
        drop(state);

        debug!("Added investment '{}' ({})", investment.name, investment.id);
        self.event_sink
            .emit(DomainEvent::investments_changed(vec![investment.id.clone()]));
        Ok(investment)
    }

    fn record_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        let mut state = self.state.write().unwrap();

        let position = state
            .investments
            .iter()
            .position(|investment| investment.id == new_transaction.investment_id)
            .ok_or_else(|| {
                LedgerError::InvestmentNotFound(new_transaction.investment_id.clone())
            })?;

        let previous_balance = state.investments[position].current_balance;
        let new_balance = new_transaction
            .transaction_type
            .apply(previous_balance, new_transaction.amount);

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            investment_id: new_transaction.investment_id,
            amount: new_transaction.amount,
            transaction_type: new_transaction.transaction_type,
            description: new_transaction.description,
            timestamp: Utc::now(),
            new_balance,
        };

        // The transaction's newBalance and the investment's currentBalance
        // must never diverge; both move inside this one lock scope.
        state.transactions.push(transaction.clone());
        state.investments[position].current_balance = new_balance;

        let persisted = self
            .repository
            .save_transactions(&state.transactions)
            .and_then(|_| self.repository.save_investments(&state.investments));
        if let Err(err) = persisted {
            state.transactions.pop();
            state.investments[position].current_balance = previous_balance;
            return Err(err);
        }
        drop(state);

        debug!(
            "Recorded {} of {} against investment {}",
            transaction.transaction_type.as_str(),
            transaction.amount,
            transaction.investment_id
        );
        self.event_sink.emit(DomainEvent::transactions_recorded(vec![
            transaction.investment_id.clone(),
        ]));
        Ok(transaction)
    }

    fn get_investment(&self, investment_id: &str) -> Result<Investment> {
        let state = self.state.read().unwrap();
        state
            .investments
            .iter()
            .find(|investment| investment.id == investment_id)
            .cloned()
            .ok_or_else(|| LedgerError::InvestmentNotFound(investment_id.to_string()).into())
    }

    fn get_investments(&self) -> Result<Vec<Investment>> {
        Ok(self.state.read().unwrap().investments.clone())
    }

    fn get_transactions(&self) -> Result<Vec<Transaction>> {
        Ok(self.state.read().unwrap().transactions.clone())
    }

    fn get_investment_transactions(&self, investment_id: &str) -> Result<Vec<Transaction>> {
        let state = self.state.read().unwrap();
        Ok(state
            .transactions
            .iter()
            .filter(|transaction| transaction.investment_id == investment_id)
            .cloned()
            .collect())
    }

    fn replace_all(
        &self,
        investments: Vec<Investment>,
        transactions: Vec<Transaction>,
    ) -> Result<()> {
        let mut state = self.state.write().unwrap();
        let previous = std::mem::replace(
            &mut *state,
            LedgerState {
                investments,
                transactions,
            },
        );

        let persisted = self
            .repository
            .save_investments(&state.investments)
            .and_then(|_| self.repository.save_transactions(&state.transactions));
        if let Err(err) = persisted {
            *state = previous;
            return Err(err);
        }

        let investment_count = state.investments.len();
        let transaction_count = state.transactions.len();
        drop(state);

        debug!(
            "Ledger replaced: {} investments, {} transactions",
            investment_count, transaction_count
        );
        self.event_sink
            .emit(DomainEvent::ledger_replaced(investment_count, transaction_count));
        Ok(())
    }
}
