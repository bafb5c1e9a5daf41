//! In-memory state

pub mod registry;

pub use registry::UserRegistry;
