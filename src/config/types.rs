//! Configuration types for payroll runs.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::Employee;

/// Metadata about the payroll being run.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollMetadata {
    /// The paying organisation.
    pub company: String,
    /// The month being paid, as `YYYY-MM`.
    pub period: String,
    /// Display code for the single currency all amounts are in.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Roster configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// Employees to pay, in payslip order.
    pub employees: Vec<Employee>,
    /// Hours or days worked by employee id. Missing entries use type defaults.
    #[serde(default)]
    pub units: HashMap<u32, Decimal>,
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    metadata: PayrollMetadata,
    period_start: NaiveDate,
    employees: Vec<Employee>,
    units: HashMap<u32, Decimal>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(
        metadata: PayrollMetadata,
        period_start: NaiveDate,
        roster: RosterConfig,
    ) -> Self {
        Self {
            metadata,
            period_start,
            employees: roster.employees,
            units: roster.units,
        }
    }

    /// Returns the payroll metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        &self.metadata
    }

    /// Returns the first day of the month being paid.
    pub fn period_start(&self) -> NaiveDate {
        self.period_start
    }

    /// Returns the validated period as `YYYY-MM`.
    pub fn period_label(&self) -> String {
        self.period_start.format("%Y-%m").to_string()
    }

    /// Returns the roster in payslip order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the reported units by employee id.
    pub fn units(&self) -> &HashMap<u32, Decimal> {
        &self.units
    }
}
