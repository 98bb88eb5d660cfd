//! Investment domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Closed set of investment categories.
///
/// The serialized labels are part of the interchange format and must not
/// change; validation treats anything outside this set as invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InvestmentType {
    Sacco,
    #[serde(rename = "Money Market Fund")]
    MoneyMarketFund,
    #[serde(rename = "ETF")]
    Etf,
    Stocks,
    Bonds,
    #[serde(rename = "Real Estate")]
    RealEstate,
    Cryptocurrency,
    Cash,
}

impl InvestmentType {
    /// Every supported category, in display order.
    pub const ALL: [InvestmentType; 8] = [
        InvestmentType::Sacco,
        InvestmentType::MoneyMarketFund,
        InvestmentType::Etf,
        InvestmentType::Stocks,
        InvestmentType::Bonds,
        InvestmentType::RealEstate,
        InvestmentType::Cryptocurrency,
        InvestmentType::Cash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentType::Sacco => "Sacco",
            InvestmentType::MoneyMarketFund => "Money Market Fund",
            InvestmentType::Etf => "ETF",
            InvestmentType::Stocks => "Stocks",
            InvestmentType::Bonds => "Bonds",
            InvestmentType::RealEstate => "Real Estate",
            InvestmentType::Cryptocurrency => "Cryptocurrency",
            InvestmentType::Cash => "Cash",
        }
    }

    /// Resolves a wire label to a category. Matching is exact.
    pub fn from_label(label: &str) -> Option<InvestmentType> {
        InvestmentType::ALL
            .into_iter()
            .find(|investment_type| investment_type.as_str() == label)
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain model representing a tracked financial position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    /// Fixed at creation; the baseline for growth and low-balance checks.
    pub initial_balance: Decimal,
    /// Mutated only through transaction recording.
    pub current_balance: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new investment.
///
/// The ledger does not validate this; callers are expected to run draft
/// validation first (see [`NewInvestment::validate`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    pub name: String,
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    pub initial_balance: Decimal,
    #[serde(default)]
    pub description: Option<String>,
}

/// An unvalidated candidate investment, as found in import documents and
/// form submissions.
///
/// Field types are deliberately loose: a malformed value deserializes to
/// `None` so that validation can report it per field instead of serde
/// rejecting the whole document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvestmentDraft {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub investment_type: Option<String>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub initial_balance: Option<Decimal>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub current_balance: Option<Decimal>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

impl InvestmentDraft {
    /// Reads a draft out of an arbitrary JSON value. Values that are not
    /// objects come back as an empty draft, which then fails validation on
    /// every field.
    pub fn from_value(value: &Value) -> InvestmentDraft {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// Converts a validated draft into a full investment record, generating
    /// the identity and audit fields the source did not carry. Fields that
    /// were present are preserved verbatim. Returns `None` when the draft
    /// never passed validation.
    pub fn into_investment(self) -> Option<Investment> {
        let name = self.name?;
        let investment_type = InvestmentType::from_label(self.investment_type.as_deref()?)?;
        let initial_balance = self.initial_balance?;
        if initial_balance < Decimal::ZERO {
            return None;
        }

        Some(Investment {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name,
            investment_type,
            initial_balance,
            current_balance: self.current_balance.unwrap_or(initial_balance),
            description: self.description,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        })
    }
}

impl From<&NewInvestment> for InvestmentDraft {
    fn from(input: &NewInvestment) -> Self {
        InvestmentDraft {
            id: None,
            name: Some(input.name.clone()),
            investment_type: Some(input.investment_type.as_str().to_string()),
            initial_balance: Some(input.initial_balance),
            current_balance: None,
            description: input.description.clone(),
            created_at: None,
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(raw) => Some(raw),
        _ => None,
    })
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => decimal_from_number(&number),
        _ => None,
    })
}

fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(raw) => DateTime::parse_from_rfc3339(&raw)
            .ok()
            .map(|instant| instant.with_timezone(&Utc)),
        _ => None,
    })
}

/// Reparses a JSON number through its decimal representation, falling back
/// to scientific notation for exponent forms.
fn decimal_from_number(number: &serde_json::Number) -> Option<Decimal> {
    let repr = number.to_string();
    Decimal::from_str(&repr)
        .ok()
        .or_else(|| Decimal::from_scientific(&repr).ok())
}
