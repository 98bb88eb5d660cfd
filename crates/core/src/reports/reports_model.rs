//! Report aggregate models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::investments::InvestmentType;

/// Headline numbers for the whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_balance: Decimal,
    pub total_deposits: Decimal,
    pub total_withdrawals: Decimal,
    /// Balance growth not explained by net contributions:
    /// `total_balance - total_deposits + total_withdrawals`.
    pub net_growth: Decimal,
}

/// Current balance grouped by investment category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAllocation {
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    pub value: Decimal,
    /// Share of the portfolio total; `None` when the total is zero.
    pub percentage: Option<Decimal>,
}

/// Per-investment performance row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentPerformance {
    pub name: String,
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    pub initial_balance: Decimal,
    pub current_balance: Decimal,
    pub total_deposits: Decimal,
    pub total_withdrawals: Decimal,
    pub net_growth: Decimal,
    /// Growth relative to the initial balance, in percent. `None` when the
    /// initial balance is zero.
    pub growth_percentage: Option<Decimal>,
}

/// Deposits and withdrawals bucketed by calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyFlow {
    /// Display label, e.g. "Jan 2025".
    pub month: String,
    pub deposits: Decimal,
    pub withdrawals: Decimal,
    pub net_flow: Decimal,
}

/// Inclusive timestamp window for report queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}
