//! Deduction calculation functionality.
//!
//! Each deduction rule is evaluated independently against gross pay (not
//! against gross minus tax), and only the rules that apply produce an entry.

use rust_decimal::Decimal;

use super::round_currency;
use crate::models::{AuditStep, DeductionKind, Deductions, Employee};

/// Flat monthly health insurance premium for full-time employees.
pub const HEALTH_INSURANCE_PREMIUM: Decimal = Decimal::from_parts(150, 0, 0, false, 0);

/// Retirement contribution as a fraction of gross pay (5%).
pub const RETIREMENT_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Flat monthly union dues.
pub const UNION_DUES: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// The result of evaluating every deduction rule.
#[derive(Debug, Clone)]
pub struct DeductionsResult {
    /// The deductions that applied, in reporting order.
    pub deductions: Deductions,
    /// One audit step per rule, whether or not it applied.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the deductions that apply to an employee for a gross amount.
///
/// - Health insurance: [`HEALTH_INSURANCE_PREMIUM`], full-time only.
/// - Retirement: [`RETIREMENT_RATE`] of gross pay, when opted in.
/// - Union dues: [`UNION_DUES`], for union members.
///
/// Audit steps are numbered consecutively from `step_number`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_deductions;
/// use payroll_engine::models::{DeductionKind, Employee, EmployeeType};
/// use rust_decimal::Decimal;
///
/// let employee = Employee::new(103, "Carol", EmployeeType::FullTime, Decimal::new(6000, 0))
///     .with_retirement(true);
/// let result = calculate_deductions(&employee, Decimal::new(6000, 0), 1);
///
/// assert_eq!(result.deductions.get(DeductionKind::HealthInsurance), Some(Decimal::new(150, 0)));
/// assert_eq!(result.deductions.get(DeductionKind::Retirement), Some(Decimal::new(300, 0)));
/// assert!(!result.deductions.contains(DeductionKind::UnionDues));
/// ```
pub fn calculate_deductions(
    employee: &Employee,
    gross_pay: Decimal,
    step_number: u32,
) -> DeductionsResult {
    let mut deductions = Deductions::new();
    let mut audit_steps = Vec::with_capacity(3);

    let health_applies = employee.is_full_time();
    if health_applies {
        deductions.insert(DeductionKind::HealthInsurance, HEALTH_INSURANCE_PREMIUM);
    }
    audit_steps.push(AuditStep {
        step_number,
        rule_id: DeductionKind::HealthInsurance.as_str().to_string(),
        rule_name: DeductionKind::HealthInsurance.label().to_string(),
        input: serde_json::json!({
            "employee_type": employee.employee_type.as_str()
        }),
        output: serde_json::json!({
            "applied": health_applies,
            "amount": applied_amount(health_applies, HEALTH_INSURANCE_PREMIUM)
        }),
        reasoning: if health_applies {
            format!("Full-time employee: flat ${} premium", HEALTH_INSURANCE_PREMIUM)
        } else {
            format!(
                "Not applied - employee is {} (health insurance is full-time only)",
                employee.employee_type.as_str()
            )
        },
    });

    let retirement = round_currency(gross_pay * RETIREMENT_RATE);
    if employee.retirement_opt_in {
        deductions.insert(DeductionKind::Retirement, retirement);
    }
    audit_steps.push(AuditStep {
        step_number: step_number + 1,
        rule_id: DeductionKind::Retirement.as_str().to_string(),
        rule_name: DeductionKind::Retirement.label().to_string(),
        input: serde_json::json!({
            "retirement_opt_in": employee.retirement_opt_in,
            "gross_pay": gross_pay.to_string(),
            "rate": RETIREMENT_RATE.to_string()
        }),
        output: serde_json::json!({
            "applied": employee.retirement_opt_in,
            "amount": applied_amount(employee.retirement_opt_in, retirement)
        }),
        reasoning: if employee.retirement_opt_in {
            format!("${} × 5% = ${}", gross_pay.normalize(), retirement)
        } else {
            "Not applied - employee has not opted in to retirement".to_string()
        },
    });

    if employee.union_member {
        deductions.insert(DeductionKind::UnionDues, UNION_DUES);
    }
    audit_steps.push(AuditStep {
        step_number: step_number + 2,
        rule_id: DeductionKind::UnionDues.as_str().to_string(),
        rule_name: DeductionKind::UnionDues.label().to_string(),
        input: serde_json::json!({
            "union_member": employee.union_member
        }),
        output: serde_json::json!({
            "applied": employee.union_member,
            "amount": applied_amount(employee.union_member, UNION_DUES)
        }),
        reasoning: if employee.union_member {
            format!("Union member: flat ${} dues", UNION_DUES)
        } else {
            "Not applied - employee is not a union member".to_string()
        },
    });

    DeductionsResult {
        deductions,
        audit_steps,
    }
}

fn applied_amount(applied: bool, amount: Decimal) -> serde_json::Value {
    if applied {
        serde_json::Value::String(amount.to_string())
    } else {
        serde_json::Value::Null
    }
}
