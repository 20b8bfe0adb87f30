//! Error types for Seal
//!
//! Clear error messages with actionable guidance.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Seal error types
#[derive(Error, Debug)]
pub enum Error {
    /// Logger options could not be turned into a typed configuration
    #[error("Invalid logger configuration: {0}")]
    InvalidConfig(String),

    /// A strict pipeline was invoked on something that is neither an experiment nor a run
    #[error("Unrecognized subject: {type_name} is neither an Experiment nor a Run")]
    UnrecognizedSubject {
        /// Type name of the rejected value
        type_name: &'static str,
    },

    /// A metric value has no JSON representation (NaN or infinite)
    #[error("Metric `{key}` of run {run_id} is not finite: {value}")]
    NonFiniteMetric {
        /// Run the metric belongs to
        run_id: String,
        /// Metric key
        key: String,
        /// Offending value
        value: f64,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error raised by a component implementation
    #[error("{0}")]
    Other(String),
}
