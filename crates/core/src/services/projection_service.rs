use tracing::{debug, warn};

use crate::errors::{ensure_finite, CoreError};
use crate::models::projection::CompoundInterestProjection;

/// Projects recurring monthly savings forward with monthly compounding.
///
/// Uses the ordinary-annuity future value (contributions at the end of each
/// month):
///
/// ```text
/// FV = P × ((1 + r)^n − 1) / r      r = annual_rate / 12, n = years × 12
/// ```
pub struct ProjectionService;

impl ProjectionService {
    pub fn new() -> Self {
        Self
    }

    /// Project `monthly_contribution` over `years` at `annual_rate`
    /// (a fraction: 0.10 = 10% per year).
    ///
    /// Rejected inputs: negative contribution, negative rate, zero years,
    /// and anything non-finite. A zero rate is valid and grows nothing.
    ///
    /// The formula is defined for any rate above -12 (a shrinking
    /// balance), but negative rates are refused: only growth is projected.
    pub fn project(
        &self,
        monthly_contribution: f64,
        annual_rate: f64,
        years: u32,
    ) -> Result<CompoundInterestProjection, CoreError> {
        ensure_finite("monthly contribution", monthly_contribution)?;
        ensure_finite("annual rate", annual_rate)?;
        if monthly_contribution < 0.0 {
            warn!(monthly_contribution, "Rejected negative monthly contribution");
            return Err(CoreError::invalid(format!(
                "Monthly contribution must not be negative, got {monthly_contribution}"
            )));
        }
        if annual_rate < 0.0 {
            warn!(annual_rate, "Rejected negative annual rate");
            return Err(CoreError::invalid(format!(
                "Annual rate must not be negative, got {annual_rate}"
            )));
        }
        if years == 0 {
            return Err(CoreError::invalid("Projection horizon must be at least 1 year"));
        }

        let monthly_rate = annual_rate / 12.0;
        let total_months = f64::from(years) * 12.0;
        let total_contributions = monthly_contribution * total_months;

        // r = 0 would divide by zero; with no growth the balance is just the deposits
        let future_value = if monthly_rate == 0.0 {
            total_contributions
        } else {
            monthly_contribution * (((1.0 + monthly_rate).powf(total_months) - 1.0) / monthly_rate)
        };
        if !future_value.is_finite() {
            return Err(CoreError::invalid(format!(
                "Projection over {years} years at rate {annual_rate} overflows"
            )));
        }
        let interest_earned = future_value - total_contributions;

        let projection = CompoundInterestProjection {
            years,
            future_value: future_value.round(),
            total_contributions: total_contributions.round(),
            interest_earned: interest_earned.round(),
            monthly_contribution,
        };

        debug!(
            monthly_contribution,
            annual_rate,
            years,
            future_value = projection.future_value,
            "Projected savings"
        );
        Ok(projection)
    }

    /// One projection per horizon, in the order given.
    /// Fails on the first horizon that [`project`](Self::project) rejects.
    pub fn project_horizons(
        &self,
        monthly_contribution: f64,
        annual_rate: f64,
        horizons: &[u32],
    ) -> Result<Vec<CompoundInterestProjection>, CoreError> {
        horizons
            .iter()
            .map(|&years| self.project(monthly_contribution, annual_rate, years))
            .collect()
    }
}

impl Default for ProjectionService {
    fn default() -> Self {
        Self::new()
    }
}
