//! Pay statement generation.
//!
//! This module runs the full pipeline for one employee: validation, gross pay,
//! tax, deductions and net pay, then assembles the [`PayStatement`].

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::{calculate_deductions, calculate_gross_pay, calculate_tax};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AuditStep, AuditTrace, AuditWarning, Employee, EmployeeType, PayStatement};

/// Generates the monthly pay statement for one employee.
///
/// The pipeline runs strictly in order: validate inputs, compute gross pay,
/// compute tax from gross pay, compute deductions from the same gross pay,
/// then net pay. Gross pay is computed once and shared by the later stages.
///
/// The function is pure: it does not mutate the employee, perform I/O, or
/// keep state between calls, so statements for different employees can be
/// generated in parallel.
///
/// Net pay is not clamped. If tax and deductions exceed gross pay the
/// statement reports the negative result and carries a `NEGATIVE_NET_PAY`
/// warning in its audit trace.
///
/// # Errors
///
/// - `InvalidEmployee` if the employee's base rate is negative
/// - `InvalidUnits` if `units_worked` is negative
/// - `AmountOverflow` if gross pay does not fit in a `Decimal`
///
/// No statement is returned when validation fails.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::generate_pay_statement;
/// use payroll_engine::models::{DeductionKind, Employee, EmployeeType};
/// use rust_decimal::Decimal;
///
/// let employee = Employee::new(103, "Carol Williams", EmployeeType::FullTime, Decimal::new(5000, 0))
///     .with_retirement(true)
///     .with_union(true);
///
/// let statement = generate_pay_statement(&employee, Decimal::ZERO).unwrap();
///
/// assert_eq!(statement.gross_pay(), Decimal::new(5000, 0));
/// assert_eq!(statement.tax_amount(), Decimal::new(600, 0));
/// assert_eq!(statement.deductions().get(DeductionKind::Retirement), Some(Decimal::new(250, 0)));
/// assert_eq!(statement.net_pay(), Decimal::new(3950, 0));
/// ```
pub fn generate_pay_statement(
    employee: &Employee,
    units_worked: Decimal,
) -> PayrollResult<PayStatement> {
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();

    // 1. Validate
    validate_inputs(employee, units_worked)?;
    steps.push(AuditStep {
        step_number: 1,
        rule_id: "input_validation".to_string(),
        rule_name: "Input Validation".to_string(),
        input: serde_json::json!({
            "employee_id": employee.id,
            "base_rate": employee.base_rate.to_string(),
            "units_worked": units_worked.to_string()
        }),
        output: serde_json::json!({ "valid": true }),
        reasoning: "Base rate and units worked are non-negative".to_string(),
    });

    if employee.employee_type == EmployeeType::FullTime && !units_worked.is_zero() {
        warnings.push(AuditWarning {
            code: "UNITS_IGNORED".to_string(),
            message: format!(
                "{} units supplied for a salaried employee were ignored",
                units_worked.normalize()
            ),
            severity: "low".to_string(),
        });
    }

    // 2. Gross pay
    let gross = calculate_gross_pay(employee, units_worked, 2)?;
    let gross_pay = gross.gross_pay;
    steps.push(gross.audit_step);

    if gross.cap_applied {
        warnings.push(AuditWarning {
            code: "PART_TIME_HOURS_CAPPED".to_string(),
            message: format!(
                "{} hours reported; only {} hours are paid",
                units_worked.normalize(),
                gross.paid_units.normalize()
            ),
            severity: "medium".to_string(),
        });
    }

    // 3. Tax, from gross pay
    let tax = calculate_tax(gross_pay, 3)?;
    let tax_amount = tax.tax_amount;
    steps.push(tax.audit_step);

    // 4. Deductions, from the same gross pay
    let deductions_result = calculate_deductions(employee, gross_pay, 4);
    let deductions = deductions_result.deductions;
    steps.extend(deductions_result.audit_steps);

    // 5. Net pay
    let total_deductions = deductions.total();
    let net_pay = gross_pay - tax_amount - total_deductions;
    steps.push(AuditStep {
        step_number: 7,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.to_string(),
            "tax_amount": tax_amount.to_string(),
            "total_deductions": total_deductions.to_string()
        }),
        output: serde_json::json!({ "net_pay": net_pay.to_string() }),
        reasoning: format!(
            "${} - ${} tax - ${} deductions = ${}",
            gross_pay, tax_amount, total_deductions, net_pay
        ),
    });

    if net_pay < Decimal::ZERO {
        warn!(
            employee_id = employee.id,
            gross_pay = %gross_pay,
            net_pay = %net_pay,
            "Tax and deductions exceed gross pay"
        );
        warnings.push(AuditWarning {
            code: "NEGATIVE_NET_PAY".to_string(),
            message: format!(
                "Tax and deductions exceed gross pay; net pay is {}",
                net_pay
            ),
            severity: "high".to_string(),
        });
    }

    debug!(
        employee_id = employee.id,
        employee_type = employee.employee_type.as_str(),
        gross_pay = %gross_pay,
        tax_amount = %tax_amount,
        net_pay = %net_pay,
        "Pay statement generated"
    );

    // 6. Assemble
    Ok(PayStatement {
        employee_id: employee.id,
        employee_type: employee.employee_type,
        units_worked,
        gross_pay,
        tax_amount,
        deductions,
        net_pay,
        audit_trace: AuditTrace { steps, warnings },
    })
}

fn validate_inputs(employee: &Employee, units_worked: Decimal) -> PayrollResult<()> {
    employee.validate()?;
    if units_worked < Decimal::ZERO {
        return Err(PayrollError::InvalidUnits {
            employee_id: employee.id,
            units: units_worked,
        });
    }
    Ok(())
}
