//! Report I/O port
//!
//! Reads the command text and writes the rendered report. Either failure
//! aborts the whole run.

use async_trait::async_trait;

use crate::error::ReportError;

/// Source of command text and sink for the rendered report
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Read the full command text
    async fn read_input(&self) -> Result<String, ReportError>;

    /// Replace the output with `contents` in one step
    async fn write_output(&self, contents: &str) -> Result<(), ReportError>;
}
