use serde::Serialize;
use thiserror::Error;

use crate::investments::ValidationReport;

/// One investment rejected from an import batch, with enough detail for the
/// caller to show which entry failed and why.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRejection {
    /// Position in the incoming `investments` array.
    pub index: usize,
    pub name: Option<String>,
    pub report: ValidationReport,
}

/// Errors raised by export/import operations. Any rejection leaves the
/// existing ledger state untouched.
#[derive(Error, Debug)]
pub enum PortabilityError {
    /// The import file could not be read.
    #[error("Failed to read import file: {0}")]
    Read(String),

    /// The document is not valid JSON, or a collection fails to decode.
    #[error("Failed to parse import document: {0}")]
    Parse(String),

    /// The document is JSON but not shaped like an export.
    #[error("Invalid import file format: {0}")]
    InvalidFormat(String),

    /// One or more investments failed validation; nothing was imported.
    #[error("Import rejected: {} invalid investment(s)", .rejections.len())]
    InvalidInvestments { rejections: Vec<InvestmentRejection> },
}
