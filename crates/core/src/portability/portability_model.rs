//! Export document models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::investments::Investment;
use crate::ledger::Transaction;

/// Format tag written into every export. Bump only with a migration path.
pub const EXPORT_FORMAT_VERSION: &str = "1.0";

/// Prefix of the suggested export file name.
pub const EXPORT_FILE_PREFIX: &str = "fintrack-export";

/// The portable interchange document: a version tag, an export timestamp,
/// and both collections verbatim. This is the sole durable interchange
/// format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub investments: Vec<Investment>,
    pub transactions: Vec<Transaction>,
}

impl ExportDocument {
    /// Suggested download name, embedding the export date.
    pub fn default_file_name(&self) -> String {
        format!(
            "{}-{}.json",
            EXPORT_FILE_PREFIX,
            self.exported_at.format("%Y-%m-%d")
        )
    }
}

/// What an accepted import replaced the ledger with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub investments: usize,
    pub transactions: usize,
}
