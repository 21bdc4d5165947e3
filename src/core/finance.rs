//! Recurring commitments: subscription cost and outstanding loans.
//!
//! Like the rest of the summary these totals are computed over the filtered
//! view, so filtering subscriptions by category gives that category's cost.

use crate::entities::{Loan, Subscription};

/// How often a subscription is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingCycle {
    /// Every week
    Weekly,
    /// Every month
    Monthly,
    /// Every three months
    Quarterly,
    /// Every year
    Yearly,
}

impl BillingCycle {
    /// Reads the backend's free-text cycle; anything unrecognized is monthly.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "weekly" | "week" => Self::Weekly,
            "quarterly" | "quarter" => Self::Quarterly,
            "yearly" | "year" | "annual" | "annually" => Self::Yearly,
            _ => Self::Monthly,
        }
    }

    /// Multiplier turning one charge into a monthly equivalent
    #[must_use]
    pub fn monthly_factor(self) -> f64 {
        match self {
            Self::Weekly => 52.0 / 12.0,
            Self::Monthly => 1.0,
            Self::Quarterly => 1.0 / 3.0,
            Self::Yearly => 1.0 / 12.0,
        }
    }
}

/// Monthly equivalent of one subscription's charge.
#[must_use]
pub fn monthly_cost(subscription: &Subscription) -> f64 {
    subscription.amount * BillingCycle::parse_lenient(&subscription.billing_cycle).monthly_factor()
}

/// Cost of the active subscriptions in a view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubscriptionTotals {
    /// Subscriptions still being charged
    pub active_count: usize,
    /// Monthly equivalent of all active charges
    pub monthly: f64,
    /// Yearly equivalent of all active charges
    pub yearly: f64,
}

/// Sums the monthly and yearly cost of active subscriptions.
#[must_use]
pub fn subscription_totals(subscriptions: &[&Subscription]) -> SubscriptionTotals {
    let (active_count, monthly) = subscriptions
        .iter()
        .filter(|s| s.is_active)
        .fold((0, 0.0), |(count, sum), s| (count + 1, sum + monthly_cost(s)));

    SubscriptionTotals {
        active_count,
        monthly,
        yearly: monthly * 12.0,
    }
}

/// Balances across the loans in a view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoanTotals {
    /// Total borrowed
    pub principal: f64,
    /// Total repaid
    pub paid: f64,
    /// Total still owed
    pub outstanding: f64,
    /// Sum of scheduled monthly payments on loans with a balance
    pub monthly_payments: f64,
}

/// Sums principal, repayments and outstanding balance.
#[must_use]
pub fn loan_totals(loans: &[&Loan]) -> LoanTotals {
    loans.iter().fold(LoanTotals::default(), |mut totals, loan| {
        totals.principal += loan.principal;
        totals.paid += loan.amount_paid;
        totals.outstanding += loan.outstanding();
        if loan.outstanding() > 0.0 {
            totals.monthly_payments += loan.monthly_payment;
        }
        totals
    })
}
