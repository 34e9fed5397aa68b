//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Fixture classes run on 2024-01-02 from 09:00 to 10:00 local time.

use chrono::{DateTime, Local};

use crate::domain::entities::{ClassId, GymClass, NewGymClass};
use crate::domain::timestamp::parse_timestamp;

/// Parse a `yyyy-MM-ddTHH:mm` local timestamp
pub fn at(timestamp: &str) -> DateTime<Local> {
    parse_timestamp(timestamp).unwrap_or_else(|| panic!("bad test timestamp: {}", timestamp))
}

/// Scheduling data for a one-hour class
pub fn new_class(name: &str, max_capacity: i64) -> NewGymClass {
    NewGymClass {
        class_name: name.to_string(),
        start_time: at("2024-01-02T09:00"),
        end_time: at("2024-01-02T10:00"),
        max_capacity,
    }
}

/// A one-hour class that is not held by any registry
pub fn test_class(name: &str, max_capacity: i64) -> GymClass {
    GymClass::new(ClassId(0), new_class(name, max_capacity))
}
