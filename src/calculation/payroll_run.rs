//! Monthly payroll runs over a list of employees.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::generate_pay_statement;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, EmployeeType, PayStatement};

/// Hours assumed for a part-time employee with no reported hours.
pub const DEFAULT_PART_TIME_HOURS: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

/// Days assumed for a contractor with no reported days.
pub const DEFAULT_CONTRACTOR_DAYS: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Returns the units used when none were reported for an employee type.
pub fn default_units(employee_type: EmployeeType) -> Decimal {
    match employee_type {
        EmployeeType::FullTime => Decimal::ZERO,
        EmployeeType::PartTime => DEFAULT_PART_TIME_HOURS,
        EmployeeType::Contractor => DEFAULT_CONTRACTOR_DAYS,
    }
}

/// Totals across every statement in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Number of statements in the run.
    pub employee_count: usize,
    /// Sum of gross pay.
    pub total_gross: Decimal,
    /// Sum of tax withheld.
    pub total_tax: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Sum of net pay.
    pub total_net: Decimal,
}

impl PayrollSummary {
    /// Builds the totals for a set of statements.
    ///
    /// # Errors
    ///
    /// Returns `AmountOverflow` if a total does not fit in a `Decimal`.
    pub fn from_statements(statements: &[PayStatement]) -> PayrollResult<Self> {
        Ok(Self {
            employee_count: statements.len(),
            total_gross: checked_total(statements, "total gross pay", PayStatement::gross_pay)?,
            total_tax: checked_total(statements, "total tax", PayStatement::tax_amount)?,
            total_deductions: checked_total(
                statements,
                "total deductions",
                PayStatement::total_deductions,
            )?,
            total_net: checked_total(statements, "total net pay", PayStatement::net_pay)?,
        })
    }
}

fn checked_total(
    statements: &[PayStatement],
    calculation: &str,
    amount: fn(&PayStatement) -> Decimal,
) -> PayrollResult<Decimal> {
    statements
        .iter()
        .try_fold(Decimal::ZERO, |total, statement| {
            total.checked_add(amount(statement))
        })
        .ok_or_else(|| PayrollError::AmountOverflow {
            calculation: calculation.to_string(),
        })
}

/// The statements produced by a monthly run, in input order, with totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// One statement per employee.
    pub statements: Vec<PayStatement>,
    /// Totals across all statements.
    pub summary: PayrollSummary,
}

/// Generates a statement for every employee.
///
/// Units come from `units_by_id` when present, otherwise from
/// [`default_units`]. The first failing employee aborts the run, as does a
/// total that overflows.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use payroll_engine::calculation::run_monthly_payroll;
/// use payroll_engine::models::{Employee, EmployeeType};
/// use rust_decimal::Decimal;
///
/// let employees = vec![
///     Employee::new(1, "Alice", EmployeeType::FullTime, Decimal::new(4000, 0)),
///     Employee::new(2, "Bob", EmployeeType::PartTime, Decimal::new(25, 0)),
/// ];
///
/// let run = run_monthly_payroll(&employees, &HashMap::new()).unwrap();
/// assert_eq!(run.statements[1].gross_pay(), Decimal::new(2000, 0)); // 80 default hours
/// assert_eq!(run.summary.employee_count, 2);
/// ```
pub fn run_monthly_payroll(
    employees: &[Employee],
    units_by_id: &HashMap<u32, Decimal>,
) -> PayrollResult<PayrollRun> {
    let statements = employees
        .iter()
        .map(|employee| {
            let units = units_by_id
                .get(&employee.id)
                .copied()
                .unwrap_or_else(|| default_units(employee.employee_type));
            generate_pay_statement(employee, units)
        })
        .collect::<PayrollResult<Vec<_>>>()?;

    let summary = PayrollSummary::from_statements(&statements)?;
    info!(
        employee_count = summary.employee_count,
        total_gross = %summary.total_gross,
        total_net = %summary.total_net,
        "Monthly payroll run completed"
    );

    Ok(PayrollRun {
        statements,
        summary,
    })
}
