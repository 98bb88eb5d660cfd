//! Reports module - read-only aggregation over the ledger snapshot.

mod reports_model;
mod reports_service;


pub use reports_model::{
    DateRange, InvestmentPerformance, MonthlyFlow, PortfolioSummary, TypeAllocation,
};
pub use reports_service::ReportsService;
