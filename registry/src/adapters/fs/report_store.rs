//! File-backed report store
//!
//! The report is first written to a sibling `.tmp` file and then renamed over
//! the destination, so an existing report is either fully replaced or left
//! untouched.

use std::ffi::OsString;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::ports::ReportStore;
use crate::error::ReportError;

#[derive(Debug, Clone)]
pub struct FsReportStore {
    input_path: PathBuf,
    output_path: PathBuf,
}

impl FsReportStore {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.output_path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl ReportStore for FsReportStore {
    async fn read_input(&self) -> Result<String, ReportError> {
        tokio::fs::read_to_string(&self.input_path)
            .await
            .map_err(|source| ReportError::Read {
                path: self.input_path.clone(),
                source,
            })
    }

    async fn write_output(&self, contents: &str) -> Result<(), ReportError> {
        let temp_path = self.temp_path();
        let write_err = |source| ReportError::Write {
            path: self.output_path.clone(),
            source,
        };

        if let Err(e) = tokio::fs::write(&temp_path, contents.as_bytes()).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(write_err(e));
        }

        if let Err(e) = tokio::fs::rename(&temp_path, &self.output_path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(write_err(e));
        }

        tracing::debug!(path = %self.output_path.display(), bytes = contents.len(), "Report written");
        Ok(())
    }
}
