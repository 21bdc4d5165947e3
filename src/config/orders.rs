//! Domain ordering arrays.
//!
//! Enumerated fields (pipeline stage, priority, category) sort by their position
//! in one of these arrays instead of alphabetically. Each collection has its
//! own array; `config.toml` may replace any of them under `[orders]`.

use crate::entities::RecordKind;
use serde::Deserialize;

/// Hiring pipeline, earliest stage first
pub const APPLICATION_STATUS_ORDER: &[&str] = &[
    "Applied",
    "Screening",
    "Interview",
    "Technical",
    "Offer",
    "Accepted",
    "Rejected",
    "Withdrawn",
];

/// Expense categories, essentials first
pub const EXPENSE_CATEGORY_ORDER: &[&str] = &[
    "Housing",
    "Food",
    "Transport",
    "Utilities",
    "Health",
    "Entertainment",
    "Shopping",
    "Education",
    "Travel",
    "Other",
];

/// Subscription categories
pub const SUBSCRIPTION_CATEGORY_ORDER: &[&str] = &[
    "Streaming",
    "Music",
    "Software",
    "Cloud",
    "News",
    "Fitness",
    "Gaming",
    "Other",
];

/// Loan lifecycle
pub const LOAN_STATUS_ORDER: &[&str] = &["Active", "Overdue", "Paid Off"];

/// Knowledge base topics
pub const KNOWLEDGE_CATEGORY_ORDER: &[&str] = &[
    "Frontend",
    "Backend",
    "Database",
    "DevOps",
    "System Design",
    "Algorithms",
    "Career",
    "Other",
];

/// Interview flow, opening to closing
pub const SCRIPT_CATEGORY_ORDER: &[&str] = &[
    "Introduction",
    "Behavioral",
    "Technical",
    "System Design",
    "Closing",
    "Other",
];

/// Todo priorities, most urgent first
pub const TODO_PRIORITY_ORDER: &[&str] = &["High", "Medium", "Low"];

fn owned(order: &[&str]) -> Vec<String> {
    order.iter().map(|s| (*s).to_string()).collect()
}

/// One ordering array per collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DomainOrders {
    /// Application `status`
    pub application_status: Vec<String>,
    /// Expense `category`
    pub expense_category: Vec<String>,
    /// Subscription `category`
    pub subscription_category: Vec<String>,
    /// Loan `status`
    pub loan_status: Vec<String>,
    /// Knowledge entry `category`
    pub knowledge_category: Vec<String>,
    /// Script `category`
    pub script_category: Vec<String>,
    /// Todo `priority`
    pub todo_priority: Vec<String>,
}

impl Default for DomainOrders {
    fn default() -> Self {
        Self {
            application_status: owned(APPLICATION_STATUS_ORDER),
            expense_category: owned(EXPENSE_CATEGORY_ORDER),
            subscription_category: owned(SUBSCRIPTION_CATEGORY_ORDER),
            loan_status: owned(LOAN_STATUS_ORDER),
            knowledge_category: owned(KNOWLEDGE_CATEGORY_ORDER),
            script_category: owned(SCRIPT_CATEGORY_ORDER),
            todo_priority: owned(TODO_PRIORITY_ORDER),
        }
    }
}

impl DomainOrders {
    /// Ordering array for the enumerated field of `kind`.
    #[must_use]
    pub fn for_kind(&self, kind: RecordKind) -> &[String] {
        match kind {
            RecordKind::Applications => &self.application_status,
            RecordKind::Expenses => &self.expense_category,
            RecordKind::Subscriptions => &self.subscription_category,
            RecordKind::Loans => &self.loan_status,
            RecordKind::Knowledge => &self.knowledge_category,
            RecordKind::Scripts => &self.script_category,
            RecordKind::Todos => &self.todo_priority,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_defaults_follow_pipeline() {
        let orders = DomainOrders::default();
        let pipeline = orders.for_kind(RecordKind::Applications);
        assert_eq!(pipeline[0], "Applied");
        assert_eq!(pipeline[1], "Screening");
        assert_eq!(orders.for_kind(RecordKind::Todos), ["High", "Medium", "Low"]);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let orders: DomainOrders = toml::from_str(
            r#"
            todo_priority = ["Urgent", "Later"]
            "#,
        )
        .unwrap();

        assert_eq!(orders.todo_priority, ["Urgent", "Later"]);
        assert_eq!(orders.loan_status, owned(LOAN_STATUS_ORDER));
    }
}
