//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for lazywire
#[derive(Error, Debug)]
pub enum Error {
    /// Injection referenced a slot name the context never declared
    #[error("Unknown service slot '{slot}'. Declared slots: {declared:?}")]
    UnknownSlot {
        /// The offending slot name
        slot: String,
        /// Every slot the context declares
        declared: Vec<&'static str>,
    },

    /// Externally supplied data failed a structural schema check
    #[error("Invalid data for {schema}: {message}")]
    Validation {
        /// Name of the schema the data was checked against
        schema: String,
        /// Description of the failure
        message: String,
    },

    /// Deferred provider lookup or construction failed
    #[error("Provider error: {message}")]
    Provider {
        /// Description of the provider error
        message: String,
    },

    /// A resolved tool runner reported a failure
    #[error("Tool error: {message}")]
    Tool {
        /// Description of the tool error
        message: String,
    },

    /// A resolved result store reported a failure
    #[error("Store error: {message}")]
    Store {
        /// Description of the store error
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

// Slot and validation error creation methods
impl Error {
    /// Create an unknown slot error
    pub fn unknown_slot<S: Into<String>>(slot: S, declared: &[&'static str]) -> Self {
        Self::UnknownSlot {
            slot: slot.into(),
            declared: declared.to_vec(),
        }
    }

    /// Create a validation error naming the offending schema
    pub fn validation<S: Into<String>, M: Into<String>>(schema: S, message: M) -> Self {
        Self::Validation {
            schema: schema.into(),
            message: message.into(),
        }
    }
}

// Dependency error creation methods
impl Error {
    /// Create a provider error
    pub fn provider<S: Into<String>>(message: S) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Create a tool error
    pub fn tool<S: Into<String>>(message: S) -> Self {
        Self::Tool {
            message: message.into(),
        }
    }

    /// Create a store error
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error (simple)
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
