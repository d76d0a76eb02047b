//! # Email Delivery Stub
//!
//! The report can in principle be emailed, but delivery is intentionally
//! unimplemented: there is no SMTP wiring in the core. This module defines
//! only the interface boundary: accept a destination address, reject
//! malformed addresses, and report that delivery is not available.

use crate::errors::{SolarError, SolarResult};

/// Request delivery of the report to `address`.
///
/// Always returns an error: [`SolarError::InvalidInput`] if the address
/// is not plausibly an email address, otherwise
/// [`SolarError::EmailNotAvailable`].
pub fn send_report(address: &str) -> SolarResult<()> {
    let address = address.trim();
    if address.is_empty() || !address.contains('@') {
        return Err(SolarError::invalid_input(
            "email",
            address,
            "Not a valid email address",
        ));
    }

    Err(SolarError::EmailNotAvailable {
        address: address.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_address_reports_not_available() {
        let err = send_report("user@example.com").unwrap_err();
        assert_eq!(err.error_code(), "EMAIL_NOT_AVAILABLE");
        assert!(matches!(
            err,
            SolarError::EmailNotAvailable { ref address } if address == "user@example.com"
        ));
    }

    #[test]
    fn test_malformed_address_rejected() {
        let err = send_report("not-an-address").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let err = send_report("   ").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
