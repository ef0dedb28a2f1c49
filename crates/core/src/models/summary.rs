use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::expense::ExpenseType;

/// Categorized analysis of a list of expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    /// Sum of all amounts
    pub total: f64,

    /// Number of expenses analysed
    pub count: usize,

    /// Sum per expense type. Types with no expenses are absent.
    pub by_type: HashMap<ExpenseType, f64>,

    /// Per-category totals, largest first
    pub by_category: Vec<CategoryTotal>,
}

impl ExpenseSummary {
    /// Total for a type, treating a missing bucket as zero.
    pub fn type_total(&self, expense_type: &ExpenseType) -> f64 {
        self.by_type.get(expense_type).copied().unwrap_or(0.0)
    }
}

/// Spending in a single category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,

    /// Type of the first expense seen in this category
    pub expense_type: ExpenseType,

    pub total: f64,
    pub count: usize,

    /// Share of overall spending: total / overall × 100 (0 when overall is 0)
    pub share_pct: f64,
}
