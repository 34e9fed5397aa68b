//! Adapters layer
//!
//! Implementations of port traits.

pub mod fs;
pub mod memory;

pub use fs::FsReportStore;
pub use memory::InMemoryRegistry;
