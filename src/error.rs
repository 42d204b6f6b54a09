//! Error types for the payroll engine.
//!
//! The payout calculation itself never fails. These errors cover the
//! plumbing around it: configuration loading, the session store, identity
//! checks and export rendering.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use halo_payroll::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/pricing.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/pricing.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The pricing table contains values the calculator cannot use.
    #[error("Invalid pricing configuration: {message}")]
    InvalidPricing {
        /// A description of the offending entry.
        message: String,
    },

    /// No session with the given id exists in the store.
    #[error("Session not found: {id}")]
    SessionNotFound {
        /// The session id that was looked up.
        id: String,
    },

    /// The session store could not be read or written.
    #[error("Session store unavailable: {message}")]
    StoreUnavailable {
        /// A description of the store failure.
        message: String,
    },

    /// The current user may not perform the requested action.
    #[error("User '{user_id}' is not allowed to {action}")]
    Unauthorized {
        /// The id of the user that attempted the action.
        user_id: String,
        /// The action that was refused.
        action: String,
    },

    /// An export could not be rendered.
    #[error("Export failed ({format}): {message}")]
    ExportError {
        /// The export format being rendered ("csv", "json").
        format: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
