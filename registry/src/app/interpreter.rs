//! Command interpreter
//!
//! Runs command lines in order against the booking service and collects the
//! report. A bad line only ever produces an error line; processing always
//! continues with the next one.

use crate::app::booking_service::BookingService;
use crate::app::command_parser::{parse_command, GymCommand};
use crate::app::report::Report;
use crate::domain::entities::{NewGymClass, NewMember};
use crate::domain::ports::Registry;

/// Counters for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub lines: usize,
    pub rejected: usize,
    pub bookings: usize,
}

pub struct CommandInterpreter<R>
where
    R: Registry,
{
    service: BookingService<R>,
    stats: RunStats,
}

impl<R> CommandInterpreter<R>
where
    R: Registry,
{
    pub fn new(registry: R) -> Self {
        Self {
            service: BookingService::new(registry),
            stats: RunStats::default(),
        }
    }

    pub fn registry(&self) -> &R {
        self.service.registry()
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Run every line of `input` and return the report
    pub fn run(&mut self, input: &str) -> Report {
        let mut report = Report::new();
        for line in split_lines(input) {
            if let Some(result) = self.execute_line(line) {
                report.push(result);
            }
        }
        report
    }

    /// Run one line. Returns the line to report, if any.
    ///
    /// Blank lines and successful `register`/`schedule` commands report nothing.
    pub fn execute_line(&mut self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        self.stats.lines += 1;

        match parse_command(line) {
            Ok(command) => self.execute(command, line),
            Err(e) => {
                tracing::debug!(error = ?e, "Rejected command line");
                self.stats.rejected += 1;
                Some(e.to_string())
            }
        }
    }

    fn execute(&mut self, command: GymCommand, line: &str) -> Option<String> {
        match command {
            GymCommand::Register { name, member_id } => {
                self.service.register_member(NewMember::new(name, member_id));
                None
            }

            GymCommand::Schedule {
                class_name,
                start_time,
                end_time,
                max_capacity,
            } => {
                self.service.schedule_class(NewGymClass {
                    class_name,
                    start_time,
                    end_time,
                    max_capacity,
                });
                None
            }

            GymCommand::Book {
                member_id,
                class_name,
                booking_time,
            } => match self.service.book(member_id, &class_name, booking_time) {
                Ok(outcome) => {
                    if outcome.is_booked() {
                        self.stats.bookings += 1;
                    } else {
                        self.stats.rejected += 1;
                    }
                    Some(outcome.to_string())
                }
                Err(e) => {
                    tracing::debug!(error = %e, "Booking lookup failed");
                    self.stats.rejected += 1;
                    Some(format!("Invalid member ID or class name: {}", line))
                }
            },
        }
    }
}

/// Split on every line terminator: `\n`, `\r\n`, a lone `\r`, NEL, and the
/// Unicode line and paragraph separators
fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    input.split(|c: char| matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}'))
}
