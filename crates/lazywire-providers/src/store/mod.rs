//! Result store providers

pub mod in_memory;
pub mod null;

pub use in_memory::InMemoryResultStore;
pub use null::NullResultStore;
