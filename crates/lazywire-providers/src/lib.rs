//! Provider implementations for lazywire
//!
//! Concrete tool runners and result stores. Each provider registers itself
//! into the registry slices declared in `lazywire-domain` via
//! `#[linkme::distributed_slice]`, so linking this crate is all it takes to
//! make its providers resolvable by name.
//!
//! Null providers exist for every category so a context can always be wired
//! without external state.

pub mod store;
pub mod tools;

pub use store::{InMemoryResultStore, NullResultStore};
pub use tools::{NullToolRunner, StaticToolRunner};
