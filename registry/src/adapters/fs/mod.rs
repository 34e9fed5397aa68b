//! Filesystem adapters
//!
//! Reads command files and writes reports using `tokio::fs`.

pub mod report_store;

pub use report_store::FsReportStore;
