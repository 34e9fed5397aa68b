//! Batch service
//!
//! Reads a command file, runs it, and writes the report. Any read or write
//! failure aborts the run; a failed read never touches the output.

use std::sync::Arc;

use crate::app::interpreter::{CommandInterpreter, RunStats};
use crate::app::report::Report;
use crate::domain::ports::{Registry, ReportStore};
use crate::error::AppError;

/// Result of a completed batch run
#[derive(Debug)]
pub struct BatchResult {
    pub report: Report,
    pub stats: RunStats,
    pub members: usize,
    pub classes: usize,
}

pub struct BatchService<RS>
where
    RS: ReportStore,
{
    store: Arc<RS>,
}

impl<RS> BatchService<RS>
where
    RS: ReportStore,
{
    pub fn new(store: Arc<RS>) -> Self {
        Self { store }
    }

    /// Run the command file against `registry` and write the report
    pub async fn run<R: Registry>(&self, registry: R) -> Result<BatchResult, AppError> {
        let input = self.store.read_input().await?;

        let mut interpreter = CommandInterpreter::new(registry);
        let report = interpreter.run(&input);

        self.store.write_output(&report.render()).await?;

        let stats = interpreter.stats();
        let result = BatchResult {
            report,
            stats,
            members: interpreter.registry().members().len(),
            classes: interpreter.registry().classes().len(),
        };

        tracing::info!(
            lines = stats.lines,
            rejected = stats.rejected,
            bookings = stats.bookings,
            members = result.members,
            classes = result.classes,
            "Batch complete"
        );

        Ok(result)
    }
}
