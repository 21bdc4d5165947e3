//! Loan entity - borrowed money being paid down.
//!
//! The amount aggregated for a loan is its outstanding balance, never negative.

use super::{
    Record, RecordKind, SortValue, flexible_id, lenient_number, normalize_key, null_as_default,
};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Loan row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    /// Backend identifier
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: String,
    /// Bank or person lending the money
    #[serde(default, deserialize_with = "null_as_default")]
    pub lender: String,
    /// Personal, auto, student, credit card...
    #[serde(default, deserialize_with = "null_as_default")]
    pub loan_type: String,
    /// Amount originally borrowed
    #[serde(default, deserialize_with = "lenient_number")]
    pub principal: f64,
    /// Amount repaid so far
    #[serde(default, deserialize_with = "lenient_number")]
    pub amount_paid: f64,
    /// Annual interest rate in percent
    #[serde(default, deserialize_with = "lenient_number")]
    pub interest_rate: f64,
    /// Scheduled monthly payment
    #[serde(default, deserialize_with = "lenient_number")]
    pub monthly_payment: f64,
    /// Date the loan started (`YYYY-MM-DD`)
    #[serde(default)]
    pub start_date: Option<String>,
    /// Active, Overdue, Paid Off
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// Free-form notes
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
    /// Server-assigned creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
    /// Server-assigned update timestamp
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Loan {
    /// Principal minus repayments, floored at zero.
    #[must_use]
    pub fn outstanding(&self) -> f64 {
        (self.principal - self.amount_paid).max(0.0)
    }
}

/// Sort keys for loans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoanSortKey {
    /// Start date
    #[default]
    StartDate,
    /// Lender name
    Lender,
    /// Outstanding balance
    Outstanding,
    /// Interest rate
    InterestRate,
    /// Status, by configured order
    Status,
}

impl FromStr for LoanSortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_key(s).as_str() {
            "start_date" | "date" => Ok(Self::StartDate),
            "lender" => Ok(Self::Lender),
            "outstanding" | "balance" => Ok(Self::Outstanding),
            "interest_rate" | "rate" => Ok(Self::InterestRate),
            "status" => Ok(Self::Status),
            _ => Err(Error::invalid("sort", s)),
        }
    }
}

impl Record for Loan {
    type SortKey = LoanSortKey;

    const KIND: RecordKind = RecordKind::Loans;

    const EXPORT_COLUMNS: &'static [&'static str] = &[
        "id",
        "lender",
        "loan_type",
        "status",
        "principal",
        "amount_paid",
        "outstanding",
        "interest_rate",
        "monthly_payment",
        "start_date",
        "notes",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.lender
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.lender.as_str(),
            self.loan_type.as_str(),
            self.notes.as_str(),
        ]
    }

    fn category(&self) -> Option<&str> {
        Some(self.status.as_str()).filter(|s| !s.is_empty())
    }

    fn date(&self) -> Option<&str> {
        self.start_date.as_deref()
    }

    fn amount(&self) -> Option<f64> {
        Some(self.outstanding())
    }

    fn sort_value(&self, key: LoanSortKey) -> SortValue<'_> {
        match key {
            LoanSortKey::StartDate => SortValue::Date(self.start_date.as_deref()),
            LoanSortKey::Lender => SortValue::Text(&self.lender),
            LoanSortKey::Outstanding => SortValue::Number(self.outstanding()),
            LoanSortKey::InterestRate => SortValue::Number(self.interest_rate),
            LoanSortKey::Status => SortValue::Ranked(&self.status),
        }
    }

    fn export_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.lender.clone(),
            self.loan_type.clone(),
            self.status.clone(),
            format!("{:.2}", self.principal),
            format!("{:.2}", self.amount_paid),
            format!("{:.2}", self.outstanding()),
            format!("{:.2}", self.interest_rate),
            format!("{:.2}", self.monthly_payment),
            self.start_date.clone().unwrap_or_default(),
            self.notes.clone(),
        ]
    }
}
