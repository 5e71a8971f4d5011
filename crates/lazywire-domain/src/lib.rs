//! Domain layer for lazywire
//!
//! Core contracts shared by every other crate in the workspace:
//!
//! - [`error`] - the workspace error type and `Result` alias
//! - [`value_objects`] - validated records exchanged with services
//! - [`ports`] - service port traits implemented by providers
//! - [`registry`] - linkme-based provider registry for deferred lookup
//!
//! This crate deliberately has no knowledge of concrete providers. Providers
//! depend on it and register themselves into the [`registry`] slices; the
//! container crate resolves them by name at the moment of first use. Both
//! sides depending on this shared crate is what keeps the dependency graph
//! acyclic at the type level.

pub mod constants;
pub mod error;
pub mod ports;
pub mod registry;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{ResultStore, ToolRunner};
pub use value_objects::{StoredResult, ToolOutcome, ToolRequest};
