use std::collections::HashMap;

use tracing::debug;

use crate::models::expense::{Expense, ExpenseType};
use crate::models::summary::{CategoryTotal, ExpenseSummary};

/// Groups and totals expenses by their already-assigned type and category.
///
/// Pure business logic — no I/O. Never re-classifies an expense.
pub struct CategorizationService;

impl CategorizationService {
    pub fn new() -> Self {
        Self
    }

    /// Group expenses into buckets keyed by `expense_type`.
    ///
    /// Only types that occur get a bucket; callers should read a missing
    /// key as "nothing spent". Input order is preserved inside each bucket.
    pub fn categorize(&self, expenses: &[Expense]) -> HashMap<ExpenseType, Vec<Expense>> {
        let mut buckets: HashMap<ExpenseType, Vec<Expense>> = HashMap::new();
        for expense in expenses {
            buckets
                .entry(expense.expense_type.clone())
                .or_default()
                .push(expense.clone());
        }
        buckets
    }

    /// Totals per type and per category, with each category's share of
    /// overall spending.
    pub fn summarize(&self, expenses: &[Expense]) -> ExpenseSummary {
        let mut total = 0.0;
        let mut by_type: HashMap<ExpenseType, f64> = HashMap::new();
        let mut by_category: Vec<CategoryTotal> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for expense in expenses {
            total += expense.amount;
            *by_type.entry(expense.expense_type.clone()).or_insert(0.0) += expense.amount;

            match index.get(expense.category.as_str()) {
                Some(&i) => {
                    by_category[i].total += expense.amount;
                    by_category[i].count += 1;
                }
                None => {
                    index.insert(expense.category.as_str(), by_category.len());
                    by_category.push(CategoryTotal {
                        category: expense.category.clone(),
                        expense_type: expense.expense_type.clone(),
                        total: expense.amount,
                        count: 1,
                        share_pct: 0.0, // filled below
                    });
                }
            }
        }

        for entry in &mut by_category {
            entry.share_pct = if total != 0.0 {
                (entry.total / total) * 100.0
            } else {
                0.0
            };
        }

        // Largest first, ties alphabetical
        by_category.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.category.cmp(&b.category))
        });

        debug!(
            expenses = expenses.len(),
            categories = by_category.len(),
            total,
            "Summarized expenses"
        );

        ExpenseSummary {
            total,
            count: expenses.len(),
            by_type,
            by_category,
        }
    }
}

impl Default for CategorizationService {
    fn default() -> Self {
        Self::new()
    }
}
