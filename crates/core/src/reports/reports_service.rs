use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use num_traits::Zero;
use rust_decimal::Decimal;

use super::reports_model::{
    DateRange, InvestmentPerformance, MonthlyFlow, PortfolioSummary, TypeAllocation,
};
use crate::errors::Result;
use crate::investments::InvestmentType;
use crate::ledger::{LedgerServiceTrait, TransactionType};

/// Spreadsheet-style aggregation over the ledger snapshot. Strictly
/// read-only; every call recomputes from the current state.
pub struct ReportsService {
    ledger: Arc<dyn LedgerServiceTrait>,
}

impl ReportsService {
    pub fn new(ledger: Arc<dyn LedgerServiceTrait>) -> Self {
        Self { ledger }
    }

    /// Headline totals across the whole portfolio.
    pub fn summary(&self) -> Result<PortfolioSummary> {
        let investments = self.ledger.get_investments()?;
        let transactions = self.ledger.get_transactions()?;

        let total_balance: Decimal = investments
            .iter()
            .map(|investment| investment.current_balance)
            .sum();
        let mut total_deposits = Decimal::ZERO;
        let mut total_withdrawals = Decimal::ZERO;
        for transaction in &transactions {
            match transaction.transaction_type {
                TransactionType::Deposit => total_deposits += transaction.amount,
                TransactionType::Withdrawal => total_withdrawals += transaction.amount,
            }
        }

        Ok(PortfolioSummary {
            total_balance,
            total_deposits,
            total_withdrawals,
            net_growth: total_balance - total_deposits + total_withdrawals,
        })
    }

    /// Current balance grouped by category, with each group's share of the
    /// portfolio total.
    pub fn allocation_by_type(&self) -> Result<Vec<TypeAllocation>> {
        let investments = self.ledger.get_investments()?;

        let mut groups: BTreeMap<InvestmentType, Decimal> = BTreeMap::new();
        for investment in &investments {
            *groups
                .entry(investment.investment_type)
                .or_insert(Decimal::ZERO) += investment.current_balance;
        }

        let total: Decimal = groups.values().copied().sum();
        Ok(groups
            .into_iter()
            .map(|(investment_type, value)| TypeAllocation {
                investment_type,
                value,
                percentage: if total.is_zero() {
                    None
                } else {
                    Some(value / total * Decimal::ONE_HUNDRED)
                },
            })
            .collect())
    }

    /// One performance row per investment. Deposit/withdrawal totals honor
    /// the window; balances and growth always reflect the full history.
    pub fn investment_performance(
        &self,
        range: Option<&DateRange>,
    ) -> Result<Vec<InvestmentPerformance>> {
        let investments = self.ledger.get_investments()?;
        let transactions = self.ledger.get_transactions()?;

        Ok(investments
            .iter()
            .map(|investment| {
                let mut total_deposits = Decimal::ZERO;
                let mut total_withdrawals = Decimal::ZERO;
                for transaction in transactions
                    .iter()
                    .filter(|transaction| transaction.investment_id == investment.id)
                {
                    if let Some(range) = range {
                        if !range.contains(transaction.timestamp) {
                            continue;
                        }
                    }
                    match transaction.transaction_type {
                        TransactionType::Deposit => total_deposits += transaction.amount,
                        TransactionType::Withdrawal => total_withdrawals += transaction.amount,
                    }
                }

                let net_growth = investment.current_balance - investment.initial_balance;
                let growth_percentage = if investment.initial_balance.is_zero() {
                    None
                } else {
                    Some(net_growth / investment.initial_balance * Decimal::ONE_HUNDRED)
                };

                InvestmentPerformance {
                    name: investment.name.clone(),
                    investment_type: investment.investment_type,
                    initial_balance: investment.initial_balance,
                    current_balance: investment.current_balance,
                    total_deposits,
                    total_withdrawals,
                    net_growth,
                    growth_percentage,
                }
            })
            .collect())
    }

    /// Deposits, withdrawals, and net flow per calendar month, sorted
    /// chronologically.
    pub fn monthly_flows(&self, range: Option<&DateRange>) -> Result<Vec<MonthlyFlow>> {
        let transactions = self.ledger.get_transactions()?;

        let mut buckets: BTreeMap<(i32, u32), (Decimal, Decimal)> = BTreeMap::new();
        for transaction in &transactions {
            if let Some(range) = range {
                if !range.contains(transaction.timestamp) {
                    continue;
                }
            }
            let key = (transaction.timestamp.year(), transaction.timestamp.month());
            let entry = buckets.entry(key).or_insert((Decimal::ZERO, Decimal::ZERO));
            match transaction.transaction_type {
                TransactionType::Deposit => entry.0 += transaction.amount,
                TransactionType::Withdrawal => entry.1 += transaction.amount,
            }
        }

        Ok(buckets
            .into_iter()
            .map(|((year, month), (deposits, withdrawals))| MonthlyFlow {
                month: month_label(year, month),
                deposits,
                withdrawals,
                net_flow: deposits - withdrawals,
            })
            .collect())
    }
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.format("%b %Y").to_string())
        .unwrap_or_else(|| format!("{:04}-{:02}", year, month))
}
