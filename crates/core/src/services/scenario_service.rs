use tracing::debug;

use crate::models::expense::{Expense, ExpenseType};
use crate::models::scenario::SavingsScenario;

/// Computes what a set of hypothetical spending cuts would save per month.
pub struct ScenarioService;

impl ScenarioService {
    pub fn new() -> Self {
        Self
    }

    /// Monthly savings if every expense were cut per `scenario`.
    ///
    /// Rule per expense, first match wins:
    /// 1. its category has a dedicated knob (dining, entertainment,
    ///    shopping, subscriptions, transportation) → that knob;
    /// 2. it is typed `luxuries` → `luxury_reduction`;
    /// 3. otherwise it contributes nothing.
    ///
    /// So a "dining" expense typed `luxuries` follows the dining knob.
    /// Percentages are not clamped. Only the final sum is rounded.
    pub fn potential_savings(&self, expenses: &[Expense], scenario: &SavingsScenario) -> f64 {
        let raw: f64 = expenses
            .iter()
            .map(|e| e.amount * (Self::reduction_for(e, scenario) / 100.0))
            .sum();
        let savings = raw.round();

        debug!(expenses = expenses.len(), raw, savings, "Computed potential savings");
        savings
    }

    fn reduction_for(expense: &Expense, scenario: &SavingsScenario) -> f64 {
        if let Some(pct) = scenario.reduction_for_category(&expense.category) {
            return pct;
        }
        match expense.expense_type {
            ExpenseType::Luxuries => scenario.luxury_reduction,
            _ => 0.0,
        }
    }
}

impl Default for ScenarioService {
    fn default() -> Self {
        Self::new()
    }
}
