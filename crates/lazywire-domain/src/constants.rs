//! Shared constants
//!
//! Slot names, default provider names and schema identifiers used across
//! the workspace. Centralized so the container, the registry and the tests
//! agree on the same strings.

/// Slot name for the tool runner dependency
pub const SLOT_TOOLS: &str = "tools";

/// Slot name for the result store dependency
pub const SLOT_STORE: &str = "store";

/// Every slot a service context declares, in declaration order
pub const DECLARED_SLOTS: &[&str] = &[SLOT_TOOLS, SLOT_STORE];

/// Default tool runner provider name
pub const DEFAULT_TOOL_PROVIDER: &str = "static";

/// Default result store provider name
pub const DEFAULT_STORE_PROVIDER: &str = "memory";

/// Schema name reported in validation errors for tool requests
pub const TOOL_REQUEST_SCHEMA: &str = "ToolRequest";
