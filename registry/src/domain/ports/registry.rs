//! Registry port
//!
//! Owns every member, class, and booking in insertion order. Nothing is ever
//! removed; the only mutation after insertion is a class's booked count.

use crate::domain::entities::{
    Booking, ClassId, GymClass, Member, MemberId, NewBooking, NewGymClass, NewMember,
};
use crate::error::DomainError;

/// Storage for members, classes, and bookings
pub trait Registry {
    /// Append a member. Duplicate ids and empty names are accepted.
    fn register_member(&mut self, member: NewMember) -> Member;

    /// Append a class with no bookings. The window and capacity are not validated.
    fn schedule_class(&mut self, class: NewGymClass) -> GymClass;

    /// First member registered with `id`
    fn find_member_by_id(&self, id: MemberId) -> Option<Member>;

    /// First class scheduled under `name`
    fn find_class_by_name(&self, name: &str) -> Option<GymClass>;

    /// Take one seat in the class, checking capacity in the same step.
    ///
    /// Returns the updated class, `DomainError::ClassFull` when no seat is
    /// left, or `DomainError::NotFound` for an unknown id.
    fn reserve_slot(&mut self, id: ClassId) -> Result<GymClass, DomainError>;

    /// Append a confirmed booking
    fn record_booking(&mut self, booking: NewBooking) -> Booking;

    fn members(&self) -> &[Member];

    fn classes(&self) -> &[GymClass];

    fn bookings(&self) -> &[Booking];
}
