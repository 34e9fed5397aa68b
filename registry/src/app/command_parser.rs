//! Command parser for command-file lines
//!
//! Parses comma-separated lines like "register,Ann,1" or
//! "book,1,Yoga,2024-01-02T09:30" into typed commands.

use chrono::{DateTime, Local};

use crate::domain::entities::MemberId;
use crate::domain::timestamp::parse_timestamp;
use crate::error::ParseError;

/// Commands accepted in a command file
#[derive(Debug, Clone, PartialEq)]
pub enum GymCommand {
    /// `register,<name>,<memberId>`
    Register { name: String, member_id: MemberId },

    /// `schedule,<className>,<start>,<end>,<maxCapacity>`
    Schedule {
        class_name: String,
        start_time: DateTime<Local>,
        end_time: DateTime<Local>,
        max_capacity: i64,
    },

    /// `book,<memberId>,<className>,<bookingTime>`
    Book {
        member_id: MemberId,
        class_name: String,
        booking_time: DateTime<Local>,
    },
}

/// Parse one command line.
///
/// Fields are split on commas and trimmed. Fields past the required count are
/// ignored. Errors carry the trimmed line so they can be echoed verbatim.
pub fn parse_command(input: &str) -> Result<GymCommand, ParseError> {
    let line = input.trim();
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();

    match parts[0] {
        "register" => {
            if parts.len() < 3 {
                return Err(ParseError::InvalidRegisterCommand(line.to_string()));
            }
            let member_id: MemberId = parts[2]
                .parse()
                .map_err(|_| ParseError::InvalidMemberId(line.to_string()))?;

            Ok(GymCommand::Register {
                name: parts[1].to_string(),
                member_id,
            })
        }

        "schedule" => {
            if parts.len() < 5 {
                return Err(ParseError::InvalidScheduleCommand(line.to_string()));
            }
            // Capacity is validated before either timestamp
            let max_capacity: i64 = parts[4]
                .parse()
                .map_err(|_| ParseError::InvalidMaxCapacity(line.to_string()))?;

            let (Some(start_time), Some(end_time)) =
                (parse_timestamp(parts[2]), parse_timestamp(parts[3]))
            else {
                return Err(ParseError::InvalidScheduleTime(line.to_string()));
            };

            Ok(GymCommand::Schedule {
                class_name: parts[1].to_string(),
                start_time,
                end_time,
                max_capacity,
            })
        }

        "book" => {
            if parts.len() < 4 {
                return Err(ParseError::InvalidBookCommand(line.to_string()));
            }
            let member_id: MemberId = parts[1]
                .parse()
                .map_err(|_| ParseError::InvalidMemberId(line.to_string()))?;
            let booking_time = parse_timestamp(parts[3])
                .ok_or_else(|| ParseError::InvalidBookingTime(line.to_string()))?;

            Ok(GymCommand::Book {
                member_id,
                class_name: parts[2].to_string(),
                booking_time,
            })
        }

        _ => Err(ParseError::UnknownCommand(line.to_string())),
    }
}

/// Generate help text describing the command file format
pub fn help_text() -> String {
    r#"Usage: gym-registry [INPUT] [OUTPUT]

Reads commands from INPUT (default: $GYM_INPUT_FILE or input.txt) and writes
the report to OUTPUT (default: $GYM_OUTPUT_FILE or output.txt).

Commands, one per line, fields separated by commas:
  register,<name>,<memberId>
  schedule,<className>,<start>,<end>,<maxCapacity>
  book,<memberId>,<className>,<bookingTime>

Times use yyyy-MM-ddTHH:mm in the local time zone. A class can be booked
from its start time up to, but not including, its end time.
"#
    .to_string()
}
