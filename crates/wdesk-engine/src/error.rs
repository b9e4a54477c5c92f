//! Error types for the window engine
//!
//! This module provides structured error types for all fallible operations
//! in the engine crate. Gesture policy decisions (a rejected drag start, a
//! click reclassification) are not errors and never surface here.

use crate::types::WidgetId;

/// Errors that can occur in window engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeskError {
    /// Widget with the given ID was not found in the store
    WidgetNotFound(WidgetId),

    /// An operation was attempted that is not valid in the current state
    InvalidOperation {
        /// The operation that was attempted
        op: &'static str,
        /// Why the operation failed
        reason: &'static str,
    },

    /// Engine configuration was rejected
    ConfigError(String),

    /// JSON serialization or deserialization failed
    SerializationError(String),

    /// The external store refused or failed a mutation
    StoreError(String),
}

impl std::fmt::Display for DeskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WidgetNotFound(id) => write!(f, "widget not found: {}", id),
            Self::InvalidOperation { op, reason } => {
                write!(f, "invalid operation '{}': {}", op, reason)
            }
            Self::ConfigError(msg) => write!(f, "config error: {}", msg),
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
            Self::StoreError(msg) => write!(f, "store error: {}", msg),
        }
    }
}

impl std::error::Error for DeskError {}

impl From<serde_json::Error> for DeskError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Result type alias for engine operations
pub type DeskResult<T> = Result<T, DeskError>;
