//! Service port traits
//!
//! Boundary contracts between the owning container and its lazily-resolved
//! dependencies. The container only ever sees these traits; concrete
//! implementations live in `lazywire-providers` and are reached through the
//! [`registry`](crate::registry) by name.
//!
//! Declaring the ports here - in a crate both sides depend on - is what lets
//! two mutually dependent services reference each other without a load-time
//! cycle: the reference is to the trait, and nothing concrete exists until a
//! slot is first read.

pub mod services;

pub use services::{ResultStore, ToolRunner};
