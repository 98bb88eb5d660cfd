//! Ledger module - the store owning investments and transactions.

mod ledger_constants;
mod ledger_errors;
mod ledger_model;
mod ledger_repository;
mod ledger_service;
mod ledger_traits;


pub use ledger_constants::*;
pub use ledger_errors::LedgerError;
pub use ledger_model::{NewTransaction, Transaction, TransactionType};
pub use ledger_repository::InMemoryLedgerRepository;
pub use ledger_service::LedgerService;
pub use ledger_traits::{LedgerServiceTrait, LedgerSnapshotRepositoryTrait};
