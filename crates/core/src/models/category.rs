use std::collections::HashMap;

use super::expense::{normalize_category, ExpenseType};

/// Classify a category name using the built-in category table.
///
/// Case-insensitive. Categories the table does not know are treated as
/// discretionary spending (`Wants`).
pub fn classify(category: &str) -> ExpenseType {
    match normalize_category(category).as_str() {
        "rent" | "housing" | "mortgage" | "utilities" | "groceries" | "healthcare"
        | "medical" | "insurance" | "transportation" | "education" | "childcare" | "debt" => {
            ExpenseType::Needs
        }
        "travel" | "luxury" | "jewelry" | "electronics" | "gadgets" | "vacation" => {
            ExpenseType::Luxuries
        }
        // dining, entertainment, shopping, subscriptions, fitness, gifts,
        // personal and anything unrecognized
        _ => ExpenseType::Wants,
    }
}

/// Classify with user overrides taking precedence over the built-in table.
/// Override keys are expected to be lowercased already.
pub fn classify_with_overrides(
    category: &str,
    overrides: &HashMap<String, ExpenseType>,
) -> ExpenseType {
    overrides
        .get(&normalize_category(category))
        .cloned()
        .unwrap_or_else(|| classify(category))
}

