use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, error};
use serde_json::Value;

use super::portability_errors::{InvestmentRejection, PortabilityError};
use super::portability_model::{ExportDocument, ImportSummary, EXPORT_FORMAT_VERSION};
use super::portability_traits::PortabilityServiceTrait;
use crate::errors::Result;
use crate::investments::{Investment, InvestmentDraft};
use crate::ledger::{LedgerServiceTrait, Transaction};

/// Service for moving the whole ledger in and out as a JSON document.
pub struct PortabilityService {
    ledger: Arc<dyn LedgerServiceTrait>,
}

impl PortabilityService {
    pub fn new(ledger: Arc<dyn LedgerServiceTrait>) -> Self {
        Self { ledger }
    }
}

#[async_trait]
impl PortabilityServiceTrait for PortabilityService {
    fn export(&self) -> Result<ExportDocument> {
        Ok(ExportDocument {
            version: EXPORT_FORMAT_VERSION.to_string(),
            exported_at: Utc::now(),
            investments: self.ledger.get_investments()?,
            transactions: self.ledger.get_transactions()?,
        })
    }

    fn export_json(&self) -> Result<String> {
        let document = self.export()?;
        Ok(serde_json::to_string_pretty(&document)?)
    }

    fn import_json(&self, content: &str) -> Result<ImportSummary> {
        let document: Value = serde_json::from_str(content)
            .map_err(|err| PortabilityError::Parse(err.to_string()))?;

        // Absence of either collection is the only format-level rejection;
        // the contents themselves are judged by validation below.
        let investments_value = document.get("investments").filter(|v| !v.is_null());
        let transactions_value = document.get("transactions").filter(|v| !v.is_null());
        let (Some(investments_value), Some(transactions_value)) =
            (investments_value, transactions_value)
        else {
            return Err(PortabilityError::InvalidFormat(
                "expected 'investments' and 'transactions' collections".to_string(),
            )
            .into());
        };
        let Some(investment_values) = investments_value.as_array() else {
            return Err(
                PortabilityError::InvalidFormat("'investments' must be an array".to_string())
                    .into(),
            );
        };
        let Some(transaction_values) = transactions_value.as_array() else {
            return Err(
                PortabilityError::InvalidFormat("'transactions' must be an array".to_string())
                    .into(),
            );
        };

        let drafts: Vec<InvestmentDraft> = investment_values
            .iter()
            .map(InvestmentDraft::from_value)
            .collect();

        let rejections: Vec<InvestmentRejection> = drafts
            .iter()
            .enumerate()
            .filter_map(|(index, draft)| {
                let report = draft.validate();
                if report.is_valid() {
                    None
                } else {
                    Some(InvestmentRejection {
                        index,
                        name: draft.name.clone(),
                        report,
                    })
                }
            })
            .collect();
        if !rejections.is_empty() {
            error!(
                "Import rejected: {} of {} investments failed validation",
                rejections.len(),
                drafts.len()
            );
            return Err(PortabilityError::InvalidInvestments { rejections }.into());
        }

        let investments: Vec<Investment> = drafts
            .into_iter()
            .map(|draft| {
                draft.into_investment().ok_or_else(|| {
                    PortabilityError::Parse(
                        "investment record could not be normalized".to_string(),
                    )
                })
            })
            .collect::<std::result::Result<_, _>>()?;

        // Transactions travel verbatim: decoded strictly, never re-validated
        // against the balances they claim.
        let transactions: Vec<Transaction> =
            serde_json::from_value(Value::Array(transaction_values.clone()))
                .map_err(|err| PortabilityError::Parse(err.to_string()))?;

        let summary = ImportSummary {
            investments: investments.len(),
            transactions: transactions.len(),
        };
        self.ledger.replace_all(investments, transactions)?;
        debug!(
            "Imported {} investments and {} transactions",
            summary.investments, summary.transactions
        );
        Ok(summary)
    }

    async fn import_file(&self, path: &Path) -> Result<ImportSummary> {
        let content = tokio::fs::read_to_string(path).await.map_err(|err| {
            PortabilityError::Read(format!("{}: {}", path.display(), err))
        })?;
        self.import_json(&content)
    }
}
