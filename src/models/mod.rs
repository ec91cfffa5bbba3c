//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod pay_statement;

pub use employee::{Employee, EmployeeType};
pub use pay_statement::{
    AuditStep, AuditTrace, AuditWarning, DeductionKind, Deductions, PayStatement,
};
