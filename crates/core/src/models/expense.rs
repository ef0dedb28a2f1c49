use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Spending class of an expense, assigned once when the expense is created.
///
/// Serialized as its lowercase tag (`"needs"`, `"wants"`, `"luxuries"`).
/// Any other tag is kept verbatim in [`ExpenseType::Other`] so that
/// foreign data round-trips and simply forms its own bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExpenseType {
    /// Essentials: rent, groceries, utilities, ...
    Needs,
    /// Discretionary spending: dining, entertainment, ...
    Wants,
    /// Optional big-ticket spending: travel, jewelry, ...
    Luxuries,
    /// Unrecognized tag, stored lowercased
    Other(String),
}

impl ExpenseType {
    /// Parse a tag case-insensitively. Never fails.
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim().to_lowercase();
        match tag.as_str() {
            "needs" => ExpenseType::Needs,
            "wants" => ExpenseType::Wants,
            "luxuries" => ExpenseType::Luxuries,
            _ => ExpenseType::Other(tag),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ExpenseType::Needs => "needs",
            ExpenseType::Wants => "wants",
            ExpenseType::Luxuries => "luxuries",
            ExpenseType::Other(tag) => tag.as_str(),
        }
    }
}

impl std::fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ExpenseType {
    fn from(tag: String) -> Self {
        ExpenseType::parse(&tag)
    }
}

impl From<&str> for ExpenseType {
    fn from(tag: &str) -> Self {
        ExpenseType::parse(tag)
    }
}

impl From<ExpenseType> for String {
    fn from(t: ExpenseType) -> Self {
        t.as_str().to_string()
    }
}

/// A single recorded outlay.
///
/// The kernel never re-derives `expense_type`; whatever was assigned at
/// creation (by the category table, a CSV column, or the caller) is final.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: Uuid,

    /// Lowercased, trimmed category name (e.g. "dining", "rent")
    pub category: String,

    /// Amount spent, currency-agnostic
    pub amount: f64,

    /// Needs / wants / luxuries
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl Expense {
    pub fn new(category: impl Into<String>, amount: f64, expense_type: ExpenseType) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: normalize_category(&category.into()),
            amount,
            expense_type,
            description: None,
            date: None,
        }
    }

    /// Attach a free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach the date the money was spent.
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

pub(crate) fn normalize_category(category: &str) -> String {
    category.trim().to_lowercase()
}
