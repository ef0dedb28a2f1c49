use serde::{Deserialize, Serialize};

/// A hypothetical set of spending cuts, one percentage per category group.
///
/// Values are plain percentages (10.0 means "cut 10%"). Nothing here is
/// clamped: the UI limits input to 0–50 in steps of 5, but the calculator
/// scales linearly with whatever it is given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingsScenario {
    pub dining_reduction: f64,
    pub entertainment_reduction: f64,
    pub shopping_reduction: f64,
    pub subscription_reduction: f64,
    pub transportation_reduction: f64,
    /// Applied to `luxuries` expenses whose category has no dedicated knob
    pub luxury_reduction: f64,
}

impl SavingsScenario {
    /// A scenario with every knob set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The same percentage for all six knobs.
    pub fn uniform(pct: f64) -> Self {
        Self {
            dining_reduction: pct,
            entertainment_reduction: pct,
            shopping_reduction: pct,
            subscription_reduction: pct,
            transportation_reduction: pct,
            luxury_reduction: pct,
        }
    }

    /// Reduction percentage for a category with its own knob, if any.
    /// Matching is case-insensitive.
    pub fn reduction_for_category(&self, category: &str) -> Option<f64> {
        match category.trim().to_lowercase().as_str() {
            "dining" => Some(self.dining_reduction),
            "entertainment" => Some(self.entertainment_reduction),
            "shopping" => Some(self.shopping_reduction),
            "subscriptions" => Some(self.subscription_reduction),
            "transportation" => Some(self.transportation_reduction),
            _ => None,
        }
    }
}
