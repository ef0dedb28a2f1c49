use tracing::{debug, warn};

use crate::errors::{ensure_finite, CoreError};
use crate::models::health::{FinancialHealthScore, HealthBreakdown, COMPONENT_MAX};

/// Points per month of expenses covered by the emergency fund
/// (three months earn the full component).
const EMERGENCY_POINTS_PER_MONTH: f64 = 8.33;

/// Heuristic 0–100 scores summarizing savings behaviour.
///
/// Two independent variants, used in different views:
/// - [`savings_health_score`](Self::savings_health_score) looks only at the
///   savings rate a scenario would reach;
/// - [`financial_health_score`](Self::financial_health_score) combines
///   savings, emergency fund, debt and net worth.
///
/// Both reject zero or negative income instead of dividing by it.
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Score the savings rate reached if `potential_savings` were realised.
    ///
    /// | rate (%) | score                          |
    /// |----------|--------------------------------|
    /// | ≥ 20     | min(90 + (rate − 20) × 0.5, 100) |
    /// | ≥ 15     | 70 + (rate − 15) × 4           |
    /// | ≥ 10     | 50 + (rate − 10) × 4           |
    /// | ≥ 5      | 30 + (rate − 5) × 4            |
    /// | < 5      | max(rate × 6, 0)               |
    pub fn savings_health_score(
        &self,
        monthly_income: f64,
        total_expenses: f64,
        potential_savings: f64,
    ) -> Result<u32, CoreError> {
        ensure_finite("monthly income", monthly_income)?;
        ensure_finite("total expenses", total_expenses)?;
        ensure_finite("potential savings", potential_savings)?;
        ensure_positive_income(monthly_income)?;

        let rate =
            ((monthly_income - total_expenses + potential_savings) / monthly_income) * 100.0;
        let score = if rate >= 20.0 {
            (90.0 + (rate - 20.0) * 0.5).min(100.0)
        } else if rate >= 15.0 {
            70.0 + (rate - 15.0) * 4.0
        } else if rate >= 10.0 {
            50.0 + (rate - 10.0) * 4.0
        } else if rate >= 5.0 {
            30.0 + (rate - 5.0) * 4.0
        } else {
            (rate * 6.0).max(0.0)
        };
        let score = score.round() as u32;

        debug!(rate, score, "Computed savings health score");
        Ok(score)
    }

    /// Four-component score, 25 points each.
    ///
    /// - savings:   savings rate × 5
    /// - emergency: months of expenses covered × 8.33
    /// - debt:      25 − (debt / annual income, in %) × 0.5
    /// - net worth: current savings / monthly income × 2
    ///
    /// Every component is clamped into 0–25 before summing.
    pub fn financial_health_score(
        &self,
        monthly_income: f64,
        total_expenses: f64,
        emergency_fund: f64,
        total_debt: f64,
        current_savings: f64,
    ) -> Result<FinancialHealthScore, CoreError> {
        ensure_finite("monthly income", monthly_income)?;
        ensure_finite("total expenses", total_expenses)?;
        ensure_finite("emergency fund", emergency_fund)?;
        ensure_finite("total debt", total_debt)?;
        ensure_finite("current savings", current_savings)?;
        ensure_positive_income(monthly_income)?;

        let savings_rate = ((monthly_income - total_expenses) / monthly_income) * 100.0;
        let emergency_months = emergency_fund / total_expenses.max(1.0);
        let debt_to_income_ratio = (total_debt / (monthly_income * 12.0)) * 100.0;

        let savings = clamp_component(savings_rate * 5.0);
        let emergency = clamp_component(emergency_months * EMERGENCY_POINTS_PER_MONTH);
        let debt = clamp_component(COMPONENT_MAX - debt_to_income_ratio * 0.5);
        let net_worth = clamp_component((current_savings / monthly_income) * 2.0);

        let total = savings + emergency + debt + net_worth;
        let result = FinancialHealthScore {
            score: total.round() as u32,
            breakdown: HealthBreakdown {
                savings: savings.round() as u32,
                emergency: emergency.round() as u32,
                debt: debt.round() as u32,
                net_worth: net_worth.round() as u32,
            },
        };

        debug!(
            savings_rate,
            emergency_months,
            debt_to_income_ratio,
            score = result.score,
            "Computed financial health score"
        );
        Ok(result)
    }
}

impl Default for HealthService {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_positive_income(monthly_income: f64) -> Result<(), CoreError> {
    if monthly_income > 0.0 {
        Ok(())
    } else {
        warn!(monthly_income, "Rejected non-positive income for health score");
        Err(CoreError::NonPositiveIncome(monthly_income))
    }
}

/// Overflowed intermediates (±inf) land on a bound; NaN counts as zero.
fn clamp_component(points: f64) -> f64 {
    if points.is_nan() {
        0.0
    } else {
        points.clamp(0.0, COMPONENT_MAX)
    }
}
