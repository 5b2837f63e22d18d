//! Unified application error type.
//! All modules (store, core, cli, doc) return AppError to keep the error
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
    // Workbook-related
    // ---------------------------
    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Day sheet '{0}' is empty: nothing to process")]
    EmptySheet(String),

    #[error("Reference file not found: {0}")]
    MissingReference(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid cost value: {0}")]
    InvalidCost(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Unknown area '{0}': not present in the areas reference list")]
    UnknownArea(String),

    #[error("Unknown vehicle '{0}': not present in the vehicles reference list")]
    UnknownVehicle(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Document / export errors
    // ---------------------------
    #[error("Document error: {0}")]
    Document(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
