//! Output report
//!
//! A fixed header followed by one line per reported command result.

/// Lines written before any command result
pub const REPORT_HEADER: [&str; 4] = [
    "Output:",
    "------",
    "Format: <Member Name> booked <Class Name> at <Booking Time>",
    "",
];

/// Accumulated result lines, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Header and result lines joined with `\n`
    pub fn render(&self) -> String {
        REPORT_HEADER
            .iter()
            .map(|line| line.to_string())
            .chain(self.lines.iter().cloned())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
