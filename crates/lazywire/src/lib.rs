//! lazywire - lazy, named-slot service container
//!
//! An owning [`ServiceContext`] declares a fixed set of named dependency
//! slots. Each slot starts empty and is resolved on first access by a
//! deferred, name-based lookup into the linkme provider registry; the result
//! is cached for the context's lifetime. Explicit injection can place or
//! replace a slot's value at any time, which is how tests wire mocks.
//!
//! ## Pattern
//!
//! ```text
//! linkme registry → ServiceResolver → SlotCell (RwLock) → ServiceContext
//!                                          ↑
//!                                 ServiceContext::inject()
//! ```
//!
//! Because construction is deferred to first access, two contexts may each
//! hold slots pointing at services of the other without either's
//! construction blocking on the other. The only illegal shape is a cyclic
//! *resolution path*: resolving one slot must not itself require resolving
//! a slot that is currently being resolved.
//!
//! ## Usage
//!
//! ```ignore
//! let config = ConfigLoader::new().load()?;
//! init_logging(config.logging.clone())?;
//! let context = build_context(config);
//!
//! // Nothing is constructed until here:
//! let stored = context
//!     .run_and_store("example_tool", &serde_json::json!({"id": "123", "value": 10}))
//!     .await?;
//! ```

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod context;
pub mod error_ext;
pub mod logging;
pub mod resolver;
pub mod slot;

// Re-export the domain layer for public API convenience
pub use lazywire_domain::error::{Error, Result};
pub use lazywire_domain::value_objects::{StoredResult, ToolOutcome, ToolRequest};
pub use lazywire_domain::{ResultStore, ToolRunner};

// Re-export providers so linking `lazywire` registers them
pub use lazywire_providers as providers;

pub use bootstrap::build_context;
pub use config::{AppConfig, ConfigLoader, ContextConfig, LoggingConfig, ProvidersConfig};
pub use context::{ContextParams, ServiceContext, ServiceInstance};
pub use logging::{init_logging, parse_log_level};
pub use resolver::{AvailableServices, ServiceResolver};
pub use slot::SlotCell;
