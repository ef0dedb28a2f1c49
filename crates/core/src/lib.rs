pub mod errors;
pub mod models;
pub mod services;

use std::io::Read;

use models::{
    category::classify_with_overrides,
    expense::{normalize_category, Expense, ExpenseType},
    health::FinancialHealthScore,
    level::{LevelState, XpProgress},
    projection::CompoundInterestProjection,
    scenario::SavingsScenario,
    settings::Settings,
    summary::ExpenseSummary,
};
use services::{
    categorization_service::CategorizationService, health_service::HealthService,
    import_service::ImportService, level_service::LevelService,
    projection_service::ProjectionService, scenario_service::ScenarioService,
};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use errors::{ensure_finite, CoreError};

/// Main entry point for the Savings Coach core library.
///
/// Holds one session's expenses and settings. Persistence belongs to the
/// embedding application: it loads expenses in, and reads them back out
/// when [`has_unsaved_changes`](Self::has_unsaved_changes) says so.
#[must_use]
pub struct SavingsCoach {
    expenses: Vec<Expense>,
    settings: Settings,
    categorization_service: CategorizationService,
    scenario_service: ScenarioService,
    projection_service: ProjectionService,
    health_service: HealthService,
    level_service: LevelService,
    import_service: ImportService,
    /// Tracks whether any mutation has occurred since the last `mark_saved`.
    dirty: bool,
}

impl std::fmt::Debug for SavingsCoach {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SavingsCoach")
            .field("expenses", &self.expenses.len())
            .field("settings", &self.settings)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl Default for SavingsCoach {
    fn default() -> Self {
        Self::new()
    }
}

impl SavingsCoach {
    /// Start an empty session with default settings.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Start an empty session with the given settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            expenses: Vec::new(),
            settings,
            categorization_service: CategorizationService::new(),
            scenario_service: ScenarioService::new(),
            projection_service: ProjectionService::new(),
            health_service: HealthService::new(),
            level_service: LevelService::new(),
            import_service: ImportService::new(),
            dirty: false,
        }
    }

    // ── Expense Management ──────────────────────────────────────────

    /// Record an expense, classifying its category with the settings'
    /// overrides and the built-in table. Returns the new expense's ID.
    pub fn add_expense(
        &mut self,
        category: &str,
        amount: f64,
    ) -> Result<uuid::Uuid, CoreError> {
        let expense_type = classify_with_overrides(category, &self.settings.category_overrides);
        self.add_expense_with_type(category, amount, expense_type)
    }

    /// Record an expense with an explicitly chosen type.
    pub fn add_expense_with_type(
        &mut self,
        category: &str,
        amount: f64,
        expense_type: ExpenseType,
    ) -> Result<uuid::Uuid, CoreError> {
        let expense = Expense::new(category, amount, expense_type);
        Self::validate_expense(&expense)?;
        let id = expense.id;
        self.expenses.push(expense);
        self.dirty = true;
        Ok(id)
    }

    /// Add several already-built expenses. All are validated first;
    /// if any fails, none are added. Returns their IDs.
    ///
    /// Categories are normalized the same way [`Expense::new`] does, so
    /// deserialized expenses group and search like locally created ones.
    /// IDs already in the session, or repeated within the batch, are rejected.
    pub fn add_expenses(
        &mut self,
        mut expenses: Vec<Expense>,
    ) -> Result<Vec<uuid::Uuid>, CoreError> {
        let mut seen: HashSet<uuid::Uuid> = self.expenses.iter().map(|e| e.id).collect();
        for expense in &mut expenses {
            expense.category = normalize_category(&expense.category);
            Self::validate_expense(expense)?;
            if !seen.insert(expense.id) {
                return Err(CoreError::ValidationError(format!(
                    "Duplicate expense id {}",
                    expense.id
                )));
            }
        }
        let ids = expenses.iter().map(|e| e.id).collect();
        self.expenses.extend(expenses);
        self.dirty = true;
        Ok(ids)
    }

    /// Remove an expense by its ID, returning it.
    pub fn remove_expense(&mut self, expense_id: uuid::Uuid) -> Result<Expense, CoreError> {
        let idx = self
            .expenses
            .iter()
            .position(|e| e.id == expense_id)
            .ok_or_else(|| CoreError::ExpenseNotFound(expense_id.to_string()))?;
        let removed = self.expenses.remove(idx);
        self.dirty = true;
        Ok(removed)
    }

    /// Drop every expense in the session.
    pub fn clear_expenses(&mut self) {
        if !self.expenses.is_empty() {
            self.expenses.clear();
            self.dirty = true;
        }
    }

    /// Get a single expense by its ID.
    #[must_use]
    pub fn get_expense(&self, expense_id: uuid::Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == expense_id)
    }

    /// All expenses, in the order they were added.
    #[must_use]
    pub fn get_expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Expenses of one type, in the order they were added.
    #[must_use]
    pub fn get_expenses_by_type(&self, expense_type: &ExpenseType) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| &e.expense_type == expense_type)
            .collect()
    }

    /// Search expenses by category and description (case-insensitive).
    #[must_use]
    pub fn search_expenses(&self, query: &str) -> Vec<&Expense> {
        let q = query.to_lowercase();
        self.expenses
            .iter()
            .filter(|e| {
                e.category.contains(&q)
                    || e.description.as_deref().unwrap_or("").to_lowercase().contains(&q)
            })
            .collect()
    }

    #[must_use]
    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    /// Sum of all expense amounts.
    #[must_use]
    pub fn total_expenses(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    // ── Import / Export ─────────────────────────────────────────────

    /// Append expenses parsed from CSV. Nothing is added if any row is
    /// invalid. Returns the number of expenses imported.
    pub fn import_csv<R: Read>(&mut self, reader: R) -> Result<usize, CoreError> {
        let imported = self.import_service.import_csv(reader, &self.settings)?;
        let count = imported.len();
        if count > 0 {
            self.expenses.extend(imported);
            self.dirty = true;
        }
        Ok(count)
    }

    /// Export all expenses as a JSON array.
    pub fn export_expenses_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.expenses)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize expenses to JSON: {e}")))
    }

    /// Load expenses from a JSON array (as produced by
    /// [`export_expenses_to_json`](Self::export_expenses_to_json)).
    /// Returns the number of expenses added.
    pub fn import_expenses_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let expenses: Vec<Expense> = serde_json::from_str(json)?;
        let count = expenses.len();
        self.add_expenses(expenses)?;
        Ok(count)
    }

    // ── Analysis ────────────────────────────────────────────────────

    /// Session expenses grouped by type.
    #[must_use]
    pub fn categorize(&self) -> HashMap<ExpenseType, Vec<Expense>> {
        self.categorization_service.categorize(&self.expenses)
    }

    /// Totals per type and per category.
    #[must_use]
    pub fn summarize(&self) -> ExpenseSummary {
        self.categorization_service.summarize(&self.expenses)
    }

    /// Monthly savings the scenario would produce on the session's expenses.
    #[must_use]
    pub fn potential_savings(&self, scenario: &SavingsScenario) -> f64 {
        self.scenario_service
            .potential_savings(&self.expenses, scenario)
    }

    // ── Projections ─────────────────────────────────────────────────

    /// Project a monthly contribution at the configured default rate.
    pub fn project_savings(
        &self,
        monthly_contribution: f64,
        years: u32,
    ) -> Result<CompoundInterestProjection, CoreError> {
        self.projection_service.project(
            monthly_contribution,
            self.settings.default_annual_rate,
            years,
        )
    }

    /// Project the scenario's savings over every configured horizon.
    pub fn projection_table(
        &self,
        scenario: &SavingsScenario,
    ) -> Result<Vec<CompoundInterestProjection>, CoreError> {
        let monthly = self.potential_savings(scenario);
        self.projection_service.project_horizons(
            monthly,
            self.settings.default_annual_rate,
            &self.settings.projection_years,
        )
    }

    // ── Health Scores ───────────────────────────────────────────────

    /// Savings-rate score (0–100) for the scenario, using the session's
    /// total expenses.
    pub fn savings_health_score(
        &self,
        monthly_income: f64,
        scenario: &SavingsScenario,
    ) -> Result<u32, CoreError> {
        self.health_service.savings_health_score(
            monthly_income,
            self.total_expenses(),
            self.potential_savings(scenario),
        )
    }

    /// Four-component score (0–100), using the session's total expenses.
    pub fn financial_health_score(
        &self,
        monthly_income: f64,
        emergency_fund: f64,
        total_debt: f64,
        current_savings: f64,
    ) -> Result<FinancialHealthScore, CoreError> {
        self.health_service.financial_health_score(
            monthly_income,
            self.total_expenses(),
            emergency_fund,
            total_debt,
            current_savings,
        )
    }

    // ── Levels ──────────────────────────────────────────────────────

    #[must_use]
    pub fn level_of(&self, experience: u64) -> u32 {
        self.level_service.level_of(experience)
    }

    #[must_use]
    pub fn xp_progress(&self, experience: u64) -> XpProgress {
        self.level_service.xp_progress(experience)
    }

    #[must_use]
    pub fn level_state(&self, experience: u64) -> LevelState {
        self.level_service.level_state(experience)
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Get current settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Set the display currency. Must be exactly 3 ASCII letters.
    pub fn set_currency(&mut self, currency: &str) -> Result<(), CoreError> {
        let trimmed = currency.trim().to_uppercase();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::ValidationError(format!(
                "Invalid currency code '{currency}': must be exactly 3 ASCII letters (e.g., USD, EUR, INR)"
            )));
        }
        self.settings.currency = trimmed;
        self.dirty = true;
        Ok(())
    }

    /// Set the annual rate used by projections (a fraction, 0.10 = 10%).
    pub fn set_default_annual_rate(&mut self, annual_rate: f64) -> Result<(), CoreError> {
        ensure_finite("annual rate", annual_rate)?;
        if annual_rate < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Annual rate must not be negative, got {annual_rate}"
            )));
        }
        self.settings.default_annual_rate = annual_rate;
        self.dirty = true;
        Ok(())
    }

    /// Replace the projection horizons. Each must be at least one year.
    pub fn set_projection_years(&mut self, years: Vec<u32>) -> Result<(), CoreError> {
        if years.contains(&0) {
            return Err(CoreError::ValidationError(
                "Projection horizons must be at least 1 year".to_string(),
            ));
        }
        self.settings.projection_years = years;
        self.dirty = true;
        Ok(())
    }

    /// Classify a category as `expense_type` for expenses added from now on.
    /// Existing expenses keep the type they were created with.
    pub fn set_category_override(&mut self, category: &str, expense_type: ExpenseType) {
        let key = normalize_category(category);
        debug!(category = %key, expense_type = %expense_type, "Set category override");
        self.settings.category_overrides.insert(key, expense_type);
        self.dirty = true;
    }

    /// Remove a category override. Returns `true` if one existed.
    pub fn remove_category_override(&mut self, category: &str) -> bool {
        let removed = self
            .settings
            .category_overrides
            .remove(&normalize_category(category))
            .is_some();
        if removed {
            self.dirty = true;
        }
        removed
    }

    // ── Change Tracking ─────────────────────────────────────────────

    /// Returns `true` if expenses or settings changed since the last
    /// [`mark_saved`](Self::mark_saved).
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// Tell the session its state has been persisted.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    // ── Internal ────────────────────────────────────────────────────

    fn validate_expense(expense: &Expense) -> Result<(), CoreError> {
        if expense.category.is_empty() {
            return Err(CoreError::ValidationError(
                "Expense category must not be empty".to_string(),
            ));
        }
        ensure_finite("amount", expense.amount)?;
        if expense.amount < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Expense amount must not be negative, got {}",
                expense.amount
            )));
        }
        Ok(())
    }
}
