//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the command file.

pub mod batch_service;
pub mod booking_service;
pub mod command_parser;
pub mod interpreter;
pub mod report;

pub use batch_service::{BatchResult, BatchService};
pub use booking_service::{BookingOutcome, BookingService};
pub use command_parser::{help_text, parse_command, GymCommand};
pub use interpreter::{CommandInterpreter, RunStats};
pub use report::{Report, REPORT_HEADER};
