//! Domain ports (traits)
//!
//! Port traits define interfaces that the application layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod registry;
pub mod report;

pub use registry::Registry;
pub use report::ReportStore;
