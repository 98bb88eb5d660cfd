//! Transaction domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a recorded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
        }
    }

    /// Applies a transaction of this direction to a running balance.
    /// Deposits add, withdrawals subtract; there is no floor.
    pub fn apply(&self, balance: Decimal, amount: Decimal) -> Decimal {
        match self {
            TransactionType::Deposit => balance + amount,
            TransactionType::Withdrawal => balance - amount,
        }
    }
}

/// A deposit or withdrawal recorded against one investment.
///
/// Transactions are append-only: once recorded they are never updated or
/// deleted individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub investment_id: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub description: Option<String>,
    pub timestamp: DateTime<Utc>,
    /// The investment's balance immediately after this transaction was
    /// applied. Denormalized at write time; never recomputed.
    pub new_balance: Decimal,
}

/// Input model for recording a deposit or withdrawal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub investment_id: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewTransaction {
    pub fn deposit(investment_id: &str, amount: Decimal) -> Self {
        NewTransaction {
            investment_id: investment_id.to_string(),
            amount,
            transaction_type: TransactionType::Deposit,
            description: None,
        }
    }

    pub fn withdrawal(investment_id: &str, amount: Decimal) -> Self {
        NewTransaction {
            investment_id: investment_id.to_string(),
            amount,
            transaction_type: TransactionType::Withdrawal,
            description: None,
        }
    }
}
