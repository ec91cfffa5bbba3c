//! Calculation logic for the payroll engine.
//!
//! This module contains the pay pipeline: gross pay by employee type,
//! progressive tax, deductions, pay statement generation, and monthly
//! payroll runs over many employees.

mod deductions;
mod gross_pay;
mod payroll_run;
mod processor;
mod rounding;
mod tax;

pub use deductions::{
    DeductionsResult, HEALTH_INSURANCE_PREMIUM, RETIREMENT_RATE, UNION_DUES, calculate_deductions,
};
pub use gross_pay::{GrossPayResult, PART_TIME_MONTHLY_HOURS_CAP, calculate_gross_pay};
pub use payroll_run::{
    DEFAULT_CONTRACTOR_DAYS, DEFAULT_PART_TIME_HOURS, PayrollRun, PayrollSummary, default_units,
    run_monthly_payroll,
};
pub use processor::generate_pay_statement;
pub use rounding::round_currency;
pub use tax::{BracketPortion, TAX_BRACKETS, TaxBracket, TaxResult, calculate_tax};
