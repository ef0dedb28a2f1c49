use std::io::Read;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::category::classify_with_overrides;
use crate::models::expense::{Expense, ExpenseType};
use crate::models::settings::Settings;

/// Column positions resolved from the header row.
struct Columns {
    category: usize,
    amount: usize,
    date: Option<usize>,
    description: Option<usize>,
    expense_type: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, CoreError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let category = find("category").ok_or_else(|| missing_column("category"))?;
        let amount = find("amount").ok_or_else(|| missing_column("amount"))?;
        Ok(Self {
            category,
            amount,
            date: find("date"),
            description: find("description"),
            expense_type: find("type"),
        })
    }
}

fn missing_column(name: &str) -> CoreError {
    CoreError::Import {
        line: 1,
        message: format!("Missing required column '{name}'"),
    }
}

/// Non-empty cell at `idx`, if the column exists and the row reaches it.
fn cell(record: &StringRecord, idx: Option<usize>) -> Option<&str> {
    idx.and_then(|i| record.get(i)).filter(|v| !v.is_empty())
}

/// Imports expenses from CSV exports.
///
/// Expected header: `date,description,category,amount[,type]` in any order,
/// case-insensitive. Only `category` and `amount` are required. Rows
/// without a `type` are classified from their category.
pub struct ImportService;

impl ImportService {
    pub fn new() -> Self {
        Self
    }

    /// Parse every row into an [`Expense`]. The first invalid row aborts the
    /// import with its line number; nothing is partially returned.
    pub fn import_csv<R: Read>(
        &self,
        reader: R,
        settings: &Settings,
    ) -> Result<Vec<Expense>, CoreError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let columns = Columns::from_headers(rdr.headers()?)?;
        let mut expenses = Vec::new();

        for result in rdr.records() {
            let record = result?;
            let line = record.position().map_or(0, |p| p.line());
            let expense = Self::parse_row(&record, &columns, settings).map_err(|message| {
                warn!(line, %message, "Rejected CSV row");
                CoreError::Import { line, message }
            })?;
            expenses.push(expense);
        }

        debug!(rows = expenses.len(), "Imported expenses from CSV");
        Ok(expenses)
    }

    fn parse_row(
        record: &StringRecord,
        columns: &Columns,
        settings: &Settings,
    ) -> Result<Expense, String> {
        let category =
            cell(record, Some(columns.category)).ok_or_else(|| "Empty category".to_string())?;

        let amount_str =
            cell(record, Some(columns.amount)).ok_or_else(|| "Missing amount".to_string())?;
        let amount: f64 = amount_str
            .parse()
            .map_err(|_| format!("Invalid amount '{amount_str}'"))?;
        if !amount.is_finite() {
            return Err(format!("Invalid amount '{amount_str}'"));
        }
        if amount < 0.0 {
            return Err(format!("Amount must not be negative, got {amount}"));
        }

        let expense_type = match cell(record, columns.expense_type) {
            Some(tag) => ExpenseType::parse(tag),
            None => classify_with_overrides(category, &settings.category_overrides),
        };

        let mut expense = Expense::new(category, amount, expense_type);
        if let Some(date_str) = cell(record, columns.date) {
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
                .map_err(|_| format!("Invalid date '{date_str}', expected YYYY-MM-DD"))?;
            expense = expense.with_date(date);
        }
        if let Some(description) = cell(record, columns.description) {
            expense = expense.with_description(description);
        }
        Ok(expense)
    }
}

impl Default for ImportService {
    fn default() -> Self {
        Self::new()
    }
}
