//! Error types for the desk
//!
//! Interactive operations never fail: missing targets and bad form input
//! degrade to no-ops or status messages. These errors cover loading the
//! configuration and writing to the key-value store.

use thiserror::Error;

/// Errors raised while loading a [`crate::DeskConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for the config schema
    #[error("invalid desk config: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Two widgets share an element id
    #[error("duplicate widget id: {0}")]
    DuplicateWidget(String),

    /// A widget was declared without an id
    #[error("widget at index {0} has no id")]
    MissingWidgetId(usize),

    /// The channel lineup is empty
    #[error("channel lineup is empty")]
    EmptyLineup,

    /// The primary widget is not declared
    #[error("primary widget not declared: {0}")]
    UnknownPrimary(String),
}

/// Errors raised by a key-value store backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected the write (quota, private mode, ...)
    #[error("storage write failed for {key}: {reason}")]
    WriteFailed { key: String, reason: String },

    /// The backend is not available at all
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A value could not be encoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
