//! Domain layer
//!
//! Contains pure business logic with no I/O.
//! - `entities`: Members, classes, and bookings
//! - `ports`: Trait definitions for storage and report I/O
//! - `timestamp`: The command-file date format

pub mod entities;
pub mod ports;
pub mod timestamp;
