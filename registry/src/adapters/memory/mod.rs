//! In-memory adapters
//!
//! Vec-backed, insertion-ordered storage. The registry lives for a single run.

pub mod registry;

pub use registry::InMemoryRegistry;
