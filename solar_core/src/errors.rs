//! # Error Types
//!
//! Structured error types for solar_core. Every failure here is a
//! deterministic validation failure, not a transient fault: there is nothing
//! to retry, and no partial result is ever returned.
//!
//! ## Example
//!
//! ```rust
//! use solar_core::errors::{SolarError, SolarResult};
//!
//! fn validate_sun_hours(sun_hours: f64) -> SolarResult<()> {
//!     if !(1.0..=24.0).contains(&sun_hours) {
//!         return Err(SolarError::invalid_input(
//!             "sun_hours",
//!             sun_hours.to_string(),
//!             "Sun hours must be between 1.0 and 24.0",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for solar_core operations
pub type SolarResult<T> = Result<T, SolarError>;

/// Structured error type for sizing operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by frontends.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SolarError {
    /// An input value violates its range constraint
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Battery type string outside the closed enum
    #[error("Unsupported battery type: {value}")]
    UnsupportedBatteryType { value: String },

    /// Email delivery is a stub; this is its fixed answer
    #[error("Email delivery not available (requested for {address})")]
    EmailNotAvailable { address: String },

    /// Report compilation or PDF rendering failed (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SolarError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SolarError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedBatteryType error
    pub fn unsupported_battery_type(value: impl Into<String>) -> Self {
        SolarError::UnsupportedBatteryType {
            value: value.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SolarError::InvalidInput { .. } => "INVALID_INPUT",
            SolarError::UnsupportedBatteryType { .. } => "UNSUPPORTED_BATTERY_TYPE",
            SolarError::EmailNotAvailable { .. } => "EMAIL_NOT_AVAILABLE",
            SolarError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}
