use thiserror::Error;

/// Unified error type for the entire savings-coach-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input validation ────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Rate-based scores divide by income; zero or negative income is rejected.
    #[error("Monthly income must be positive, got {0}")]
    NonPositiveIncome(f64),

    // ── Session state ───────────────────────────────────────────────
    #[error("Expense not found: {0}")]
    ExpenseNotFound(String),

    // ── Import ──────────────────────────────────────────────────────
    #[error("Import failed on line {line}: {message}")]
    Import { line: u64, message: String },

    #[error("CSV error: {0}")]
    Csv(String),

    // ── Settings (de)serialization ──────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl CoreError {
    /// Shorthand for a validation error with a formatted message.
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        CoreError::ValidationError(message.into())
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        match e.position() {
            Some(pos) => CoreError::Import {
                line: pos.line(),
                message: e.to_string(),
            },
            None => CoreError::Csv(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

/// Reject NaN and infinities before they leak into a computed result.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::invalid(format!("{name} must be a finite number, got {value}")))
    }
}
