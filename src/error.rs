//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can stop a pay statement from being produced.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Validation errors are raised before any computation starts, so a caller
/// never receives a partially-computed statement.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/roster.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/roster.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The hours or days worked for an employee were negative.
    #[error("Invalid units worked for employee {employee_id}: {units} (must be non-negative)")]
    InvalidUnits {
        /// The employee the units were supplied for.
        employee_id: u32,
        /// The rejected value.
        units: Decimal,
    },

    /// The tax engine was asked to tax a negative gross amount.
    #[error("Gross pay must be non-negative, got {amount}")]
    NegativeGrossPay {
        /// The rejected gross amount.
        amount: Decimal,
    },

    /// An amount exceeded the range of the decimal type.
    #[error("Amount overflowed while computing {calculation}")]
    AmountOverflow {
        /// The quantity being computed when the overflow occurred.
        calculation: String,
    },

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
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PayrollError::ConfigNotFound {
            path: "/missing/roster.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/roster.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PayrollError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_employee_displays_field_and_message() {
        let error = PayrollError::InvalidEmployee {
            field: "base_rate".to_string(),
            message: "must be non-negative, got -1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'base_rate': must be non-negative, got -1"
        );
    }

    #[test]
    fn test_invalid_units_displays_employee_and_value() {
        let error = PayrollError::InvalidUnits {
            employee_id: 104,
            units: Decimal::from_str("-3.5").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid units worked for employee 104: -3.5 (must be non-negative)"
        );
    }

    #[test]
    fn test_negative_gross_pay_displays_amount() {
        let error = PayrollError::NegativeGrossPay {
            amount: Decimal::from_str("-10.00").unwrap(),
        };
        assert_eq!(error.to_string(), "Gross pay must be non-negative, got -10.00");
    }

    #[test]
    fn test_amount_overflow_displays_calculation() {
        let error = PayrollError::AmountOverflow {
            calculation: "gross pay for employee 7".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Amount overflowed while computing gross pay for employee 7"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> PayrollResult<()> {
            Err(PayrollError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
