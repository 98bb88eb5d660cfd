//! Investments module - domain models, drafts, and validation.

mod investments_model;
mod investments_validation;

#[cfg(test)]
mod investments_model_tests;

pub use investments_model::{Investment, InvestmentDraft, InvestmentType, NewInvestment};
pub use investments_validation::{InvestmentField, ValidationReport};
