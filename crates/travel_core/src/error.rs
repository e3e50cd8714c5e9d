//! Error types shared by the client core.
//!
//! Validation variants carry the exact text shown to the user, so the UI can
//! alert with `err.to_string()` and tests can still match on the variant.

use thiserror::Error;

/// Failure of the key-value store or of a download sink.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),

    #[error("database: {0}")]
    Database(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Rejected expense tracker action. No state was changed.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("Please enter valid item and amount!")]
    EmptyItem,

    #[error("Please enter valid item and amount!")]
    MissingAmount,

    #[error("Please enter valid item and amount!")]
    InvalidAmount(String),

    #[error("Please enter valid item and amount!")]
    NonPositiveAmount(f64),

    #[error("No expenses to save!")]
    NothingToExport,

    #[error("could not serialize trip: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("could not read trip file: {0}")]
    Parse(serde_json::Error),

    #[error("could not save trip: {0}")]
    Sink(#[from] StorageError),
}

impl ExpenseError {
    /// True for input problems the user fixes by re-entering the form.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ExpenseError::EmptyItem
                | ExpenseError::MissingAmount
                | ExpenseError::InvalidAmount(_)
                | ExpenseError::NonPositiveAmount(_)
        )
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::Database(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("❌ Invalid username or password.")]
    InvalidCredentials,

    #[error(transparent)]
    Storage(#[from] StorageError),
}
