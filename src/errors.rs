//! Unified application error type.
//! Catalog, log, storage and CLI code all return AppError so user-facing
//! failures (validation, duplicates, forbidden deletes) and persistence
//! failures can be told apart at the point where they are reported.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // User-facing domain errors
    // ---------------------------
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not allowed: {0}")]
    Forbidden(String),

    // ---------------------------
    // Durable storage
    // ---------------------------
    #[error("Persistence error: {0}")]
    Persistence(String),

    // ---------------------------
    // IO / encoding
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export / import
    // ---------------------------
    #[error("Import rejected: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    pub fn is_persistence(&self) -> bool {
        matches!(self, AppError::Persistence(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
