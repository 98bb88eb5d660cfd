//! Portability module - JSON export and import of the full ledger.

mod portability_errors;
mod portability_model;
mod portability_service;
mod portability_traits;

#[cfg(test)]
mod portability_service_tests;

pub use portability_errors::{InvestmentRejection, PortabilityError};
pub use portability_model::{ExportDocument, ImportSummary, EXPORT_FILE_PREFIX, EXPORT_FORMAT_VERSION};
pub use portability_service::PortabilityService;
pub use portability_traits::PortabilityServiceTrait;
