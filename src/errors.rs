//! Unified application error type.
//! All modules (db, core, render, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

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

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid duty status: {0}")]
    InvalidDutyStatus(String),

    #[error("Invalid cycle rule: {0}")]
    InvalidCycleRule(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No trip found with id {0}")]
    UnknownTrip(i64),

    #[error("Trip {0} is already completed")]
    TripCompleted(i64),

    #[error("No log entries found for date {0}")]
    NoEntriesForDate(String),

    #[error("Invalid entry sequence: {0}")]
    EntrySequence(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Render / export errors
    // ---------------------------
    #[error("Sheet render error: {0}")]
    Render(String),

    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
