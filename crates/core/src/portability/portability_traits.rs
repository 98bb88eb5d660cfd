//! Portability service trait.

use std::path::Path;

use async_trait::async_trait;

use super::portability_model::{ExportDocument, ImportSummary};
use crate::errors::Result;

/// Contract for ledger export and import.
///
/// Everything here is synchronous except `import_file`: reading a
/// user-supplied file is the one suspend point in the system, and nothing
/// else depends on its timing.
#[async_trait]
pub trait PortabilityServiceTrait: Send + Sync {
    /// Snapshot of the full ledger in the interchange format.
    fn export(&self) -> Result<ExportDocument>;

    /// The export document as pretty-printed JSON.
    fn export_json(&self) -> Result<String>;

    /// Parses, validates, and applies an exported document, replacing the
    /// ledger wholesale. Any rejection leaves existing state untouched.
    fn import_json(&self, content: &str) -> Result<ImportSummary>;

    /// Reads a file and runs it through `import_json`.
    async fn import_file(&self, path: &Path) -> Result<ImportSummary>;
}
