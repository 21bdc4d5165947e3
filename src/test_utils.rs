//! Shared test utilities for `folio-buddy`.
//!
//! Builders for records with sensible defaults. Every field not named in the
//! arguments is left empty so queries in tests only match what the test set.

use crate::entities::{Application, Expense, Loan, Subscription, Todo};

/// Creates a test application.
///
/// # Defaults
/// * `position`, `location`, `notes`: empty
/// * `applied_date`: None
/// * `is_favorite`: false
pub fn application(id: &str, company: &str, status: &str) -> Application {
    Application {
        id: id.to_string(),
        company: company.to_string(),
        status: status.to_string(),
        ..Default::default()
    }
}

/// Marks any application as a favorite.
pub fn favorite(mut app: Application) -> Application {
    app.is_favorite = true;
    app
}

/// Creates a test expense. An empty `date` leaves the expense undated.
pub fn expense(id: &str, description: &str, category: &str, amount: f64, date: &str) -> Expense {
    Expense {
        id: id.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        amount,
        date: (!date.is_empty()).then(|| date.to_string()),
        ..Default::default()
    }
}

/// Creates an open todo with no due date.
pub fn todo(id: &str, title: &str, priority: &str) -> Todo {
    Todo {
        id: id.to_string(),
        title: title.to_string(),
        priority: priority.to_string(),
        ..Default::default()
    }
}

/// Creates an active monthly subscription.
pub fn subscription(id: &str, name: &str, category: &str, amount: f64) -> Subscription {
    Subscription {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        amount,
        billing_cycle: "monthly".to_string(),
        ..Default::default()
    }
}

/// Creates an active loan with nothing repaid yet.
///
/// # Defaults
/// * `status`: "Active"
/// * `monthly_payment`: 0.0
pub fn loan(id: &str, lender: &str, principal: f64) -> Loan {
    Loan {
        id: id.to_string(),
        lender: lender.to_string(),
        principal,
        status: "Active".to_string(),
        ..Default::default()
    }
}
