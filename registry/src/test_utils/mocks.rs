//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured to fail, so tests can
//! check how the batch runner reacts.

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::ReportStore;
use crate::error::ReportError;

// ============================================================================
// In-Memory Report Store
// ============================================================================

#[derive(Debug, Default)]
pub struct InMemoryReportStore {
    input: Option<String>,
    fail_write: bool,
    written: Mutex<Option<String>>,
}

impl InMemoryReportStore {
    pub fn with_input(input: &str) -> Self {
        Self {
            input: Some(input.to_string()),
            ..Self::default()
        }
    }

    /// Store whose input cannot be read
    pub fn failing_read() -> Self {
        Self::default()
    }

    /// Make every write fail
    pub fn failing_write(mut self) -> Self {
        self.fail_write = true;
        self
    }

    /// Last report written, if any
    pub fn written(&self) -> Option<String> {
        self.written.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportStore for InMemoryReportStore {
    async fn read_input(&self) -> Result<String, ReportError> {
        self.input.clone().ok_or_else(|| ReportError::Read {
            path: PathBuf::from("memory://input"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no input configured"),
        })
    }

    async fn write_output(&self, contents: &str) -> Result<(), ReportError> {
        if self.fail_write {
            return Err(ReportError::Write {
                path: PathBuf::from("memory://output"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        *self.written.lock().unwrap() = Some(contents.to_string());
        Ok(())
    }
}
