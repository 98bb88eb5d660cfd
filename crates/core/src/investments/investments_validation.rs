//! Draft validation.
//!
//! Pure, side-effect-free checks of a candidate investment against the
//! domain rules. Every failing field is reported; there is no
//! short-circuiting, and outcomes are returned as data rather than errors.
//! This has no knowledge of transactions or balances - it only checks the
//! static shape of a draft.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::investments_model::{InvestmentDraft, InvestmentType, NewInvestment};

/// Field keys used in validation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvestmentField {
    Name,
    Type,
    InitialBalance,
}

impl InvestmentField {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentField::Name => "name",
            InvestmentField::Type => "type",
            InvestmentField::InitialBalance => "initialBalance",
        }
    }
}

/// Outcome of validating an investment draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Field to human-readable message, one entry per failing rule.
    pub errors: BTreeMap<InvestmentField, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: InvestmentField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

impl InvestmentDraft {
    /// Checks the draft against the domain rules:
    /// - `name` must be at least 2 characters after trimming
    /// - `type` must be one of the closed set of categories
    /// - `initialBalance` must be a non-negative number (zero is allowed)
    pub fn validate(&self) -> ValidationReport {
        let mut errors = BTreeMap::new();

        match self.name.as_deref().map(str::trim) {
            Some(trimmed) if trimmed.chars().count() >= 2 => {}
            _ => {
                errors.insert(
                    InvestmentField::Name,
                    "Investment name must be at least 2 characters long".to_string(),
                );
            }
        }

        if self
            .investment_type
            .as_deref()
            .and_then(InvestmentType::from_label)
            .is_none()
        {
            errors.insert(InvestmentField::Type, "Invalid investment type".to_string());
        }

        match self.initial_balance {
            Some(balance) if balance >= Decimal::ZERO => {}
            _ => {
                errors.insert(
                    InvestmentField::InitialBalance,
                    "Initial balance must be a non-negative number".to_string(),
                );
            }
        }

        ValidationReport { errors }
    }
}

impl NewInvestment {
    /// Validates the new investment data through the draft rules.
    pub fn validate(&self) -> ValidationReport {
        InvestmentDraft::from(self).validate()
    }
}
