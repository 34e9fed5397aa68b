//! Gym membership registry
//!
//! Registers members, schedules classes, and books members into classes from a
//! comma-separated command file, producing a plain-text report.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;
