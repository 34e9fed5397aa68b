//! Booking domain entity
//!
//! A confirmed seat for one member in one class. Bookings are only created by
//! a successful booking attempt and are never removed.

use chrono::{DateTime, Local};

use super::gym_class::ClassId;
use super::member::Member;

/// Position of a booking in the registry's booking log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookingId(pub usize);

/// A confirmed booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub member: Member,
    pub class_id: ClassId,
    pub class_name: String,
    pub booking_time: DateTime<Local>,
}

/// Data needed to record a booking
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub member: Member,
    pub class_id: ClassId,
    pub class_name: String,
    pub booking_time: DateTime<Local>,
}
