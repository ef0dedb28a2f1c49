use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::expense::ExpenseType;
use crate::errors::CoreError;

/// Annual return assumed by savings projections unless configured otherwise.
pub const DEFAULT_ANNUAL_RATE: f64 = 0.10;

/// User-configurable settings, owned by the embedding application.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// partial JSON document such as `{"currency":"EUR"}` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Currency all amounts are displayed in (e.g. "USD", "INR", "EUR").
    pub currency: String,

    /// Annual rate used by projections, as a fraction (0.10 = 10%).
    pub default_annual_rate: f64,

    /// Horizons (in years) shown in the projection table.
    pub projection_years: Vec<u32>,

    /// Category → type assignments that take precedence over the
    /// built-in table. Keys are lowercase category names.
    pub category_overrides: HashMap<String, ExpenseType>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            default_annual_rate: DEFAULT_ANNUAL_RATE,
            projection_years: vec![1, 5, 10, 20, 30],
            category_overrides: HashMap::new(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings)
    }

    /// Serialize settings to a JSON document.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self).map_err(|e| CoreError::Serialization(e.to_string()))
    }
}
