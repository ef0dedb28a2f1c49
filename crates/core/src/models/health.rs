use serde::{Deserialize, Serialize};

/// Maximum points a single component of the four-part score can earn.
pub const COMPONENT_MAX: f64 = 25.0;

/// Four-component financial health score (0–100).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialHealthScore {
    /// Rounded sum of the four unrounded components
    pub score: u32,
    pub breakdown: HealthBreakdown,
}

/// Per-component points, each rounded and within 0–25.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthBreakdown {
    /// From the monthly savings rate
    pub savings: u32,
    /// From emergency fund coverage (3 months of expenses earns the max)
    pub emergency: u32,
    /// From the debt-to-annual-income ratio (less debt scores higher)
    pub debt: u32,
    /// From accumulated savings relative to monthly income
    pub net_worth: u32,
}
