use serde::{Deserialize, Serialize};

/// Result of projecting a recurring monthly contribution forward.
///
/// The three money figures are rounded to whole units, so
/// `future_value == total_contributions + interest_earned` holds to ±1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestProjection {
    /// Projection horizon in years
    pub years: u32,

    /// Balance after `years * 12` end-of-month contributions
    pub future_value: f64,

    /// Sum of all contributions (monthly_contribution × months)
    pub total_contributions: f64,

    /// future_value − total_contributions
    pub interest_earned: f64,

    /// Contribution per month, passed through unrounded
    pub monthly_contribution: f64,
}
