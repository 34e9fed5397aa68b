//! Gym class domain entity
//!
//! A scheduled class with a half-open time window `[start_time, end_time)` and
//! a seat limit. The booked count is the only field that changes after
//! scheduling, and only through [`GymClass::try_reserve_slot`].

use chrono::{DateTime, Local};

/// Insertion index of a class within the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub usize);

impl std::fmt::Display for ClassId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scheduled gym class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GymClass {
    pub id: ClassId,
    pub class_name: String,
    pub start_time: DateTime<Local>,
    /// Exclusive upper bound of the booking window
    pub end_time: DateTime<Local>,
    pub max_capacity: i64,
    booked_count: i64,
}

impl GymClass {
    /// Create a class with no bookings
    pub fn new(id: ClassId, class: NewGymClass) -> Self {
        Self {
            id,
            class_name: class.class_name,
            start_time: class.start_time,
            end_time: class.end_time,
            max_capacity: class.max_capacity,
            booked_count: 0,
        }
    }

    pub fn booked_count(&self) -> i64 {
        self.booked_count
    }

    /// Check if any seat is left, regardless of time
    pub fn has_capacity(&self) -> bool {
        self.booked_count < self.max_capacity
    }

    /// Check if `at` falls inside `[start_time, end_time)`
    pub fn is_in_session(&self, at: &DateTime<Local>) -> bool {
        self.start_time <= *at && *at < self.end_time
    }

    /// Take one seat if one is left. Returns `false` when the class is full.
    pub fn try_reserve_slot(&mut self) -> bool {
        if self.has_capacity() {
            self.booked_count += 1;
            true
        } else {
            false
        }
    }
}

/// Data needed to schedule a new class
#[derive(Debug, Clone)]
pub struct NewGymClass {
    pub class_name: String,
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
    pub max_capacity: i64,
}
