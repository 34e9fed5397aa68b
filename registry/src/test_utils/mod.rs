//! Test utilities
//!
//! Hand-written mocks and fixtures for unit testing.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
