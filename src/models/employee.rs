//! Employee model and related types.
//!
//! This module defines the Employee struct and EmployeeType enum
//! for representing workers in the payroll system.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Represents the type of employment arrangement.
///
/// The type decides which gross-pay formula applies and what `base_rate` means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeType {
    /// Salaried employee; `base_rate` is the monthly salary.
    FullTime,
    /// Hourly employee; `base_rate` is the hourly rate (capped at 120 paid hours).
    PartTime,
    /// Contractor; `base_rate` is the daily rate.
    Contractor,
}

impl EmployeeType {
    /// Returns the snake_case label used in serialized output and audit steps.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeType::FullTime => "full_time",
            EmployeeType::PartTime => "part_time",
            EmployeeType::Contractor => "contractor",
        }
    }

    /// Returns the unit `units_worked` is measured in for this type.
    pub fn unit_label(&self) -> &'static str {
        match self {
            EmployeeType::FullTime => "n/a",
            EmployeeType::PartTime => "hours",
            EmployeeType::Contractor => "days",
        }
    }
}

/// Represents an employee's identity and compensation profile.
///
/// Employees are constructed once by the caller and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Caller-assigned identifier. Uniqueness is not checked by the engine.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// The type of employment arrangement.
    pub employee_type: EmployeeType,
    /// Monthly salary, hourly rate or daily rate depending on `employee_type`.
    pub base_rate: Decimal,
    /// Whether the employee elected the 5% retirement deduction.
    #[serde(default)]
    pub retirement_opt_in: bool,
    /// Whether the flat union dues deduction applies.
    #[serde(default)]
    pub union_member: bool,
}

impl Employee {
    /// Creates an employee with no elections.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, EmployeeType};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new(101, "Alice Smith", EmployeeType::FullTime, Decimal::new(3500, 0))
    ///     .with_retirement(true);
    /// assert!(employee.retirement_opt_in);
    /// assert!(!employee.union_member);
    /// ```
    pub fn new(
        id: u32,
        name: impl Into<String>,
        employee_type: EmployeeType,
        base_rate: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            employee_type,
            base_rate,
            retirement_opt_in: false,
            union_member: false,
        }
    }

    /// Sets the retirement election.
    pub fn with_retirement(mut self, opt_in: bool) -> Self {
        self.retirement_opt_in = opt_in;
        self
    }

    /// Sets union membership.
    pub fn with_union(mut self, member: bool) -> Self {
        self.union_member = member;
        self
    }

    /// Returns true if the employee is salaried full-time.
    pub fn is_full_time(&self) -> bool {
        self.employee_type == EmployeeType::FullTime
    }

    /// Checks the record-level invariants.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEmployee` if `base_rate` is negative.
    pub fn validate(&self) -> PayrollResult<()> {
        if self.base_rate < Decimal::ZERO {
            return Err(PayrollError::InvalidEmployee {
                field: "base_rate".to_string(),
                message: format!("must be non-negative, got {}", self.base_rate),
            });
        }
        Ok(())
    }
}
