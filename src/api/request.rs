//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the `/pay-statements`
//! and `/payroll` endpoints.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, EmployeeType};

/// Request body for the `/pay-statements` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementRequest {
    /// The employee to pay.
    pub employee: EmployeeRequest,
    /// Hours (part-time) or days (contractor) worked. Ignored for full-time.
    #[serde(default)]
    pub units_worked: Decimal,
}

/// Request body for the `/payroll` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Employees to pay, in payslip order.
    pub employees: Vec<EmployeeRequest>,
    /// Units worked keyed by employee id. Missing entries use type defaults.
    #[serde(default)]
    pub units: HashMap<u32, Decimal>,
}

/// Employee information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Caller-assigned identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// The type of employment arrangement.
    pub employee_type: EmployeeType,
    /// Monthly salary, hourly rate or daily rate.
    pub base_rate: Decimal,
    /// Whether the employee elected the retirement deduction.
    #[serde(default)]
    pub retirement_opt_in: bool,
    /// Whether the employee pays union dues.
    #[serde(default)]
    pub union_member: bool,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee::new(req.id, req.name, req.employee_type, req.base_rate)
            .with_retirement(req.retirement_opt_in)
            .with_union(req.union_member)
    }
}
