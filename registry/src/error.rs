//! Unified error types for the gym registry
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core booking and lookup errors
//! - `ParseError`: Per-line command errors (reported in the output, never fatal)
//! - `ReportError`: Input/output file errors (fatal for the whole run)
//! - `AppError`: Application layer errors returned by the batch runner

use std::path::PathBuf;

use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Class is full: {0}")]
    ClassFull(String),
}

/// Parse error for command lines
///
/// Every variant carries the trimmed source line; the `Display` output is the
/// exact line written to the report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid register command: {0}")]
    InvalidRegisterCommand(String),

    #[error("Invalid member ID: {0}")]
    InvalidMemberId(String),

    #[error("Invalid schedule command: {0}")]
    InvalidScheduleCommand(String),

    #[error("Invalid max capacity: {0}")]
    InvalidMaxCapacity(String),

    #[error("Invalid schedule time format: {0}")]
    InvalidScheduleTime(String),

    #[error("Invalid book command: {0}")]
    InvalidBookCommand(String),

    #[error("Invalid booking time format: {0}")]
    InvalidBookingTime(String),

    #[error("Invalid command: {0}")]
    UnknownCommand(String),
}

/// Report input/output errors
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to read input file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Application layer errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display_is_report_line() {
        assert_eq!(
            ParseError::InvalidRegisterCommand("register,OnlyName".to_string()).to_string(),
            "Invalid register command: register,OnlyName"
        );
        assert_eq!(
            ParseError::UnknownCommand("cancel,1".to_string()).to_string(),
            "Invalid command: cancel,1"
        );
    }

    #[test]
    fn report_error_wraps_into_app_error() {
        let err = ReportError::Read {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let app: AppError = err.into();
        assert!(matches!(app, AppError::Report(ReportError::Read { .. })));
        assert!(app.to_string().contains("missing.txt"));
    }
}
