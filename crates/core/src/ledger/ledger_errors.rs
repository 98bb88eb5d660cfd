use thiserror::Error;

/// Errors raised by ledger mutations and lookups.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A lookup or transaction referenced an investment id the ledger does
    /// not know. Recording against a dangling reference is a caller error,
    /// never a silent drop.
    #[error("Investment '{0}' not found")]
    InvestmentNotFound(String),
}
