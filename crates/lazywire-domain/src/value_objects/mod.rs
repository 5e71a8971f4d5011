//! Value objects
//!
//! Typed records exchanged between the service context and its providers.
//! External input is accepted only after a structural schema check; failures
//! surface as [`Error::Validation`](crate::error::Error::Validation) naming
//! the schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::constants::TOOL_REQUEST_SCHEMA;
use crate::error::{Error, Result};

/// Externally supplied request for a tool run
///
/// The only record accepted from outside the process boundary, so it
/// carries both serde typing and `validator` structural constraints.
///
/// # Example
///
/// ```
/// use lazywire_domain::value_objects::ToolRequest;
/// use serde_json::json;
///
/// let request = ToolRequest::from_value(&json!({"id": "123", "value": 10})).unwrap();
/// assert_eq!(request.id, "123");
/// assert_eq!(request.value, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ToolRequest {
    /// Caller-assigned request identifier
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,
    /// Request payload value
    pub value: i64,
}

impl ToolRequest {
    /// Validate a JSON value against the `ToolRequest` schema
    ///
    /// Runs serde deserialization first (field presence and types), then
    /// the `validator` structural checks. Either failure is reported as a
    /// validation error naming the schema.
    pub fn from_value(value: &Value) -> Result<Self> {
        let request: Self = serde_json::from_value(value.clone())
            .map_err(|e| Error::validation(TOOL_REQUEST_SCHEMA, e.to_string()))?;

        request
            .validate()
            .map_err(|e| Error::validation(TOOL_REQUEST_SCHEMA, e.to_string()))?;

        Ok(request)
    }
}

/// Outcome of a single tool run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutcome {
    /// Name of the tool that ran
    pub tool: String,
    /// Tool output payload
    pub output: String,
    /// When the outcome was produced
    pub produced_at: DateTime<Utc>,
}

impl ToolOutcome {
    /// Create a new outcome stamped with the current time
    pub fn new<T: Into<String>, O: Into<String>>(tool: T, output: O) -> Self {
        Self {
            tool: tool.into(),
            output: output.into(),
            produced_at: Utc::now(),
        }
    }
}

/// A persisted tool outcome with a store-assigned identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredResult {
    /// Store-assigned identifier
    pub id: String,
    /// The persisted outcome
    pub outcome: ToolOutcome,
}
