//! Error handling for lineplot-rs
//!
//! This module defines the crate error type and a Result alias. Missing
//! layers on settings and highlight operations are not errors; those calls
//! are silent no-ops. Errors here come from the plot host, from rejected
//! setting names, and from configuration I/O.

use crate::host::LayerNumber;
use thiserror::Error;

/// Main error type for lineplot-rs operations
#[derive(Error, Debug)]
pub enum LinePlotError {
    /// The host has no layer with this number
    #[error("Layer {0} not found")]
    LayerNotFound(LayerNumber),

    /// A setting name that layers do not understand
    #[error("Unknown layer setting: {0}")]
    UnknownSetting(String),

    /// A known setting with a value of the wrong shape
    #[error("Invalid value for layer setting '{name}': {message}")]
    InvalidSetting { name: String, message: String },

    /// A color string that could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure reported by a plot host implementation
    #[error("Plot host error: {0}")]
    Host(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<LinePlotError>,
    },
}

impl LinePlotError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        LinePlotError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<serde_json::Error> for LinePlotError {
    fn from(err: serde_json::Error) -> Self {
        LinePlotError::Serialization(err.to_string())
    }
}

/// Result type alias for lineplot-rs operations
pub type Result<T> = std::result::Result<T, LinePlotError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
