//! In-memory registry
//!
//! Lookups are linear scans so that the first inserted match wins when ids or
//! names repeat.

use crate::domain::entities::{
    Booking, BookingId, ClassId, GymClass, Member, MemberId, NewBooking, NewGymClass, NewMember,
};
use crate::domain::ports::Registry;
use crate::error::DomainError;

#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    members: Vec<Member>,
    classes: Vec<GymClass>,
    bookings: Vec<Booking>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Registry for InMemoryRegistry {
    fn register_member(&mut self, member: NewMember) -> Member {
        let member = Member {
            id: member.id,
            name: member.name,
        };
        self.members.push(member.clone());
        member
    }

    fn schedule_class(&mut self, class: NewGymClass) -> GymClass {
        let class = GymClass::new(ClassId(self.classes.len()), class);
        self.classes.push(class.clone());
        class
    }

    fn find_member_by_id(&self, id: MemberId) -> Option<Member> {
        self.members.iter().find(|m| m.id == id).cloned()
    }

    fn find_class_by_name(&self, name: &str) -> Option<GymClass> {
        self.classes.iter().find(|c| c.class_name == name).cloned()
    }

    fn reserve_slot(&mut self, id: ClassId) -> Result<GymClass, DomainError> {
        let class = self
            .classes
            .get_mut(id.0)
            .ok_or_else(|| DomainError::NotFound(format!("class {}", id)))?;

        if class.try_reserve_slot() {
            Ok(class.clone())
        } else {
            Err(DomainError::ClassFull(class.class_name.clone()))
        }
    }

    fn record_booking(&mut self, booking: NewBooking) -> Booking {
        let booking = Booking {
            id: BookingId(self.bookings.len()),
            member: booking.member,
            class_id: booking.class_id,
            class_name: booking.class_name,
            booking_time: booking.booking_time,
        };
        self.bookings.push(booking.clone());
        booking
    }

    fn members(&self) -> &[Member] {
        &self.members
    }

    fn classes(&self) -> &[GymClass] {
        &self.classes
    }

    fn bookings(&self) -> &[Booking] {
        &self.bookings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{at, new_class};

    #[test]
    fn register_member_appends_in_order() {
        let mut registry = InMemoryRegistry::new();
        registry.register_member(NewMember::new("Ann", MemberId(1)));
        registry.register_member(NewMember::new("Bob", MemberId(2)));

        let names: Vec<&str> = registry.members().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bob"]);
    }

    #[test]
    fn duplicate_member_ids_first_match_wins() {
        let mut registry = InMemoryRegistry::new();
        registry.register_member(NewMember::new("Ann", MemberId(1)));
        registry.register_member(NewMember::new("Impostor", MemberId(1)));

        assert_eq!(registry.members().len(), 2);
        let found = registry.find_member_by_id(MemberId(1)).unwrap();
        assert_eq!(found.name, "Ann");
    }

    #[test]
    fn empty_member_name_is_accepted() {
        let mut registry = InMemoryRegistry::new();
        let member = registry.register_member(NewMember::new("", MemberId(5)));
        assert_eq!(member.name, "");
        assert!(registry.find_member_by_id(MemberId(5)).is_some());
    }

    #[test]
    fn find_member_missing_returns_none() {
        let registry = InMemoryRegistry::new();
        assert!(registry.find_member_by_id(MemberId(999)).is_none());
    }

    #[test]
    fn schedule_class_assigns_insertion_ids() {
        let mut registry = InMemoryRegistry::new();
        let yoga = registry.schedule_class(new_class("Yoga", 1));
        let spin = registry.schedule_class(new_class("Spin", 1));

        assert_eq!(yoga.id, ClassId(0));
        assert_eq!(spin.id, ClassId(1));
        assert_eq!(yoga.booked_count(), 0);
    }

    #[test]
    fn schedule_class_accepts_inverted_window() {
        let mut registry = InMemoryRegistry::new();
        let mut class = new_class("Backwards", 1);
        std::mem::swap(&mut class.start_time, &mut class.end_time);
        let class = registry.schedule_class(class);
        assert!(class.end_time < class.start_time);
        assert_eq!(registry.classes().len(), 1);
    }

    #[test]
    fn duplicate_class_names_first_match_wins() {
        let mut registry = InMemoryRegistry::new();
        registry.schedule_class(new_class("Yoga", 1));
        registry.schedule_class(new_class("Yoga", 10));

        let found = registry.find_class_by_name("Yoga").unwrap();
        assert_eq!(found.id, ClassId(0));
        assert_eq!(found.max_capacity, 1);
    }

    #[test]
    fn find_class_is_exact_match() {
        let mut registry = InMemoryRegistry::new();
        registry.schedule_class(new_class("Yoga", 1));
        assert!(registry.find_class_by_name("yoga").is_none());
        assert!(registry.find_class_by_name("Yoga ").is_none());
    }

    #[test]
    fn reserve_slot_until_full() {
        let mut registry = InMemoryRegistry::new();
        let class = registry.schedule_class(new_class("Yoga", 1));

        let updated = registry.reserve_slot(class.id).unwrap();
        assert_eq!(updated.booked_count(), 1);

        let err = registry.reserve_slot(class.id).unwrap_err();
        assert_eq!(err, DomainError::ClassFull("Yoga".to_string()));
        assert_eq!(registry.classes()[0].booked_count(), 1);
    }

    #[test]
    fn reserve_slot_unknown_class() {
        let mut registry = InMemoryRegistry::new();
        let err = registry.reserve_slot(ClassId(3)).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn record_booking_appends() {
        let mut registry = InMemoryRegistry::new();
        let member = registry.register_member(NewMember::new("Ann", MemberId(1)));
        let class = registry.schedule_class(new_class("Yoga", 1));

        let booking = registry.record_booking(NewBooking {
            member: member.clone(),
            class_id: class.id,
            class_name: class.class_name.clone(),
            booking_time: at("2024-01-02T09:30"),
        });

        assert_eq!(booking.id, BookingId(0));
        assert_eq!(registry.bookings().len(), 1);
        assert_eq!(registry.bookings()[0].member, member);
    }
}
