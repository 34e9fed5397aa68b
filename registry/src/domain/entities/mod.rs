//! Domain entities
//!
//! Pure domain models for members, scheduled classes, and bookings.

pub mod booking;
pub mod gym_class;
pub mod member;

pub use booking::{Booking, BookingId, NewBooking};
pub use gym_class::{ClassId, GymClass, NewGymClass};
pub use member::{Member, MemberId, NewMember};
