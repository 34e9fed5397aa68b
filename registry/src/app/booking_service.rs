//! Booking service
//!
//! Registers members, schedules classes, and decides booking attempts.
//!
//! A booking attempt is resolved in a fixed order, which also decides the
//! message reported back:
//! 1. Time inside the class window: take a seat, checking capacity in the same
//!    step. No seat left means the class is "already full".
//! 2. Outside the window with no seat left: the class is "full".
//! 3. Otherwise the time is outside the window.

use chrono::{DateTime, Local};

use crate::domain::entities::{
    Booking, GymClass, Member, MemberId, NewBooking, NewGymClass, NewMember,
};
use crate::domain::ports::Registry;
use crate::domain::timestamp::format_timestamp;
use crate::error::DomainError;

/// Result of a booking attempt
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    /// Seat taken and booking recorded
    Booked(Booking),

    /// The time fit, but no seat was left
    AlreadyFull { class_name: String },

    /// No seats left and the time is outside the window
    Full { class_name: String },

    /// Seats left, but the time is outside `[start_time, end_time)`
    InvalidTime {
        requested: DateTime<Local>,
        class_name: String,
        start_time: DateTime<Local>,
        end_time: DateTime<Local>,
    },
}

impl BookingOutcome {
    pub fn is_booked(&self) -> bool {
        matches!(self, BookingOutcome::Booked(_))
    }
}

impl std::fmt::Display for BookingOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingOutcome::Booked(booking) => write!(
                f,
                "{} booked {} at {}",
                booking.member.name,
                booking.class_name,
                format_timestamp(&booking.booking_time)
            ),
            BookingOutcome::AlreadyFull { class_name } => {
                write!(f, "The class {} is already full.", class_name)
            }
            BookingOutcome::Full { class_name } => write!(f, "The class {} is full.", class_name),
            BookingOutcome::InvalidTime {
                requested,
                class_name,
                start_time,
                end_time,
            } => write!(
                f,
                "Invalid booking time: {}. The class {} is scheduled from {} to {}.",
                format_timestamp(requested),
                class_name,
                format_timestamp(start_time),
                format_timestamp(end_time)
            ),
        }
    }
}

/// Service for registry updates and booking decisions
pub struct BookingService<R>
where
    R: Registry,
{
    registry: R,
}

impl<R> BookingService<R>
where
    R: Registry,
{
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn register_member(&mut self, member: NewMember) -> Member {
        let member = self.registry.register_member(member);
        tracing::debug!(member_id = %member.id, name = %member.name, "Member registered");
        member
    }

    pub fn schedule_class(&mut self, class: NewGymClass) -> GymClass {
        let class = self.registry.schedule_class(class);
        tracing::debug!(
            class_id = %class.id,
            class_name = %class.class_name,
            max_capacity = class.max_capacity,
            "Class scheduled"
        );
        class
    }

    /// Look up the member and class, then attempt the booking.
    ///
    /// Returns `DomainError::NotFound` when either lookup fails.
    pub fn book(
        &mut self,
        member_id: MemberId,
        class_name: &str,
        booking_time: DateTime<Local>,
    ) -> Result<BookingOutcome, DomainError> {
        let member = self
            .registry
            .find_member_by_id(member_id)
            .ok_or_else(|| DomainError::NotFound(format!("member {}", member_id)))?;
        let class = self
            .registry
            .find_class_by_name(class_name)
            .ok_or_else(|| DomainError::NotFound(format!("class {}", class_name)))?;

        self.attempt_booking(&member, &class, booking_time)
    }

    /// Decide a booking attempt for a class snapshot taken from the registry
    pub fn attempt_booking(
        &mut self,
        member: &Member,
        class: &GymClass,
        booking_time: DateTime<Local>,
    ) -> Result<BookingOutcome, DomainError> {
        if class.is_in_session(&booking_time) {
            let reserved = match self.registry.reserve_slot(class.id) {
                Ok(reserved) => reserved,
                Err(DomainError::ClassFull(_)) => {
                    return Ok(BookingOutcome::AlreadyFull {
                        class_name: class.class_name.clone(),
                    });
                }
                Err(e) => return Err(e),
            };

            let booking = self.registry.record_booking(NewBooking {
                member: member.clone(),
                class_id: reserved.id,
                class_name: reserved.class_name.clone(),
                booking_time,
            });
            tracing::debug!(
                member_id = %member.id,
                class_name = %reserved.class_name,
                booked = reserved.booked_count(),
                max_capacity = reserved.max_capacity,
                "Booking confirmed"
            );
            return Ok(BookingOutcome::Booked(booking));
        }

        if !class.has_capacity() {
            return Ok(BookingOutcome::Full {
                class_name: class.class_name.clone(),
            });
        }

        Ok(BookingOutcome::InvalidTime {
            requested: booking_time,
            class_name: class.class_name.clone(),
            start_time: class.start_time,
            end_time: class.end_time,
        })
    }
}
