//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid period: {0} (expected YYYY-MM or 'Month YYYY')")]
    InvalidPeriod(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Rotation data errors
    // ---------------------------
    /// A period's rows cannot be normalized. Callers scanning history skip
    /// the period and keep going.
    #[error("Malformed period {period}: {reason}")]
    MalformedPeriod { period: String, reason: String },

    #[error("Period not found: {0}")]
    PeriodNotFound(String),

    #[error("Period already exists: {0} (use --force to replace it)")]
    PeriodExists(String),

    #[error("No periods stored yet, import one first")]
    NoPeriods,

    #[error("Member '{member}' not found in {period}")]
    MemberNotFound { member: String, period: String },

    // ---------------------------
    // Scheduling invariants (fatal)
    // ---------------------------
    #[error("No available slot at or before index {desired}")]
    NoAvailableSlot { desired: usize },

    #[error("Queue reordering inconsistency: {0}")]
    ReorderingInconsistency(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Whether the error must stop a scheduling run before anything is written.
    pub fn is_fatal_invariant(&self) -> bool {
        matches!(
            self,
            AppError::NoAvailableSlot { .. } | AppError::ReorderingInconsistency(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
