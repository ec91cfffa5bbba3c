//! Gross pay calculation.
//!
//! This module dispatches on [`EmployeeType`] to turn a base rate and the
//! units worked in the month into gross pay.

use rust_decimal::Decimal;

use super::round_currency;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AuditStep, Employee, EmployeeType};

/// Maximum paid hours per month for part-time employees.
///
/// Hours beyond the cap are not paid.
pub const PART_TIME_MONTHLY_HOURS_CAP: Decimal = Decimal::from_parts(120, 0, 0, false, 0);

/// The result of calculating gross pay, including the audit step.
#[derive(Debug, Clone)]
pub struct GrossPayResult {
    /// Gross pay rounded to cents.
    pub gross_pay: Decimal,
    /// The units the rate was multiplied by, after any cap.
    /// Zero for full-time employees.
    pub paid_units: Decimal,
    /// True if the part-time hours cap reduced the paid units.
    pub cap_applied: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates gross pay for an employee.
///
/// - Full-time: the base rate is the monthly salary; `units_worked` is ignored.
/// - Part-time: base rate × hours, with hours capped at
///   [`PART_TIME_MONTHLY_HOURS_CAP`] before multiplying.
/// - Contractor: base rate × days, uncapped.
///
/// # Errors
///
/// - `InvalidUnits` if `units_worked` is negative
/// - `AmountOverflow` if rate × units does not fit in a `Decimal`
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_gross_pay;
/// use payroll_engine::models::{Employee, EmployeeType};
/// use rust_decimal::Decimal;
///
/// let employee = Employee::new(104, "David Brown", EmployeeType::PartTime, Decimal::new(20, 0));
/// let result = calculate_gross_pay(&employee, Decimal::new(130, 0), 1).unwrap();
///
/// assert_eq!(result.gross_pay, Decimal::new(2400, 0));
/// assert!(result.cap_applied);
/// ```
pub fn calculate_gross_pay(
    employee: &Employee,
    units_worked: Decimal,
    step_number: u32,
) -> PayrollResult<GrossPayResult> {
    if units_worked < Decimal::ZERO {
        return Err(PayrollError::InvalidUnits {
            employee_id: employee.id,
            units: units_worked,
        });
    }

    let rate = employee.base_rate;
    let (paid_units, cap_applied, unrounded, reasoning) = match employee.employee_type {
        EmployeeType::FullTime => (
            Decimal::ZERO,
            false,
            rate,
            format!("Salaried employee: gross pay is the monthly salary ${}", rate.normalize()),
        ),
        EmployeeType::PartTime => {
            let cap_applied = units_worked > PART_TIME_MONTHLY_HOURS_CAP;
            let hours = units_worked.min(PART_TIME_MONTHLY_HOURS_CAP);
            let gross = checked_product(employee, rate, hours)?;
            let reasoning = if cap_applied {
                format!(
                    "{} hours capped at {}; {} hours × ${} = ${}",
                    units_worked.normalize(),
                    PART_TIME_MONTHLY_HOURS_CAP,
                    hours.normalize(),
                    rate.normalize(),
                    gross.normalize()
                )
            } else {
                format!(
                    "{} hours × ${} = ${}",
                    hours.normalize(),
                    rate.normalize(),
                    gross.normalize()
                )
            };
            (hours, cap_applied, gross, reasoning)
        }
        EmployeeType::Contractor => {
            let gross = checked_product(employee, rate, units_worked)?;
            let reasoning = format!(
                "{} days × ${} = ${}",
                units_worked.normalize(),
                rate.normalize(),
                gross.normalize()
            );
            (units_worked, false, gross, reasoning)
        }
    };

    let gross_pay = round_currency(unrounded);

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_pay".to_string(),
        rule_name: "Gross Pay".to_string(),
        input: serde_json::json!({
            "employee_type": employee.employee_type.as_str(),
            "base_rate": rate.normalize().to_string(),
            "units_worked": units_worked.normalize().to_string(),
            "unit": employee.employee_type.unit_label()
        }),
        output: serde_json::json!({
            "paid_units": paid_units.normalize().to_string(),
            "cap_applied": cap_applied,
            "gross_pay": gross_pay.to_string()
        }),
        reasoning,
    };

    Ok(GrossPayResult {
        gross_pay,
        paid_units,
        cap_applied,
        audit_step,
    })
}

fn checked_product(employee: &Employee, rate: Decimal, units: Decimal) -> PayrollResult<Decimal> {
    rate.checked_mul(units).ok_or_else(|| PayrollError::AmountOverflow {
        calculation: format!("gross pay for employee {}", employee.id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee(employee_type: EmployeeType, rate: &str) -> Employee {
        Employee::new(1, "Test Employee", employee_type, dec(rate))
    }

    #[test]
    fn test_full_time_gross_is_salary() {
        let employee = create_test_employee(EmployeeType::FullTime, "4500");
        let result = calculate_gross_pay(&employee, Decimal::ZERO, 1).unwrap();

        assert_eq!(result.gross_pay, dec("4500.00"));
        assert_eq!(result.paid_units, Decimal::ZERO);
        assert!(!result.cap_applied);
    }

    #[test]
    fn test_full_time_ignores_units() {
        let employee = create_test_employee(EmployeeType::FullTime, "4500");
        let with_units = calculate_gross_pay(&employee, dec("37"), 1).unwrap();
        let without = calculate_gross_pay(&employee, Decimal::ZERO, 1).unwrap();

        assert_eq!(with_units.gross_pay, without.gross_pay);
    }

    #[test]
    fn test_part_time_rate_times_hours() {
        let employee = create_test_employee(EmployeeType::PartTime, "25.00");
        let result = calculate_gross_pay(&employee, dec("80"), 1).unwrap();

        assert_eq!(result.gross_pay, dec("2000.00"));
        assert_eq!(result.paid_units, dec("80"));
    }

    #[test]
    fn test_part_time_at_cap_is_not_capped() {
        let employee = create_test_employee(EmployeeType::PartTime, "30.00");
        let result = calculate_gross_pay(&employee, dec("120"), 1).unwrap();

        assert_eq!(result.gross_pay, dec("3600.00"));
        assert!(!result.cap_applied);
    }

    #[test]
    fn test_part_time_hours_capped_at_120() {
        let employee = create_test_employee(EmployeeType::PartTime, "20");
        let result = calculate_gross_pay(&employee, dec("130"), 1).unwrap();

        assert_eq!(result.gross_pay, dec("2400"));
        assert_eq!(result.paid_units, dec("120"));
        assert!(result.cap_applied);
        assert!(result.audit_step.reasoning.contains("capped at 120"));
    }

    #[test]
    fn test_part_time_150_hours_equals_120_hours() {
        let employee = create_test_employee(EmployeeType::PartTime, "28.50");
        let capped = calculate_gross_pay(&employee, dec("150"), 1).unwrap();
        let at_cap = calculate_gross_pay(&employee, dec("120"), 1).unwrap();

        assert_eq!(capped.gross_pay, at_cap.gross_pay);
    }

    #[test]
    fn test_contractor_rate_times_days_uncapped() {
        let employee = create_test_employee(EmployeeType::Contractor, "200.00");
        let result = calculate_gross_pay(&employee, dec("15"), 1).unwrap();
        assert_eq!(result.gross_pay, dec("3000.00"));

        let long_month = calculate_gross_pay(&employee, dec("200"), 1).unwrap();
        assert_eq!(long_month.gross_pay, dec("40000.00"));
        assert!(!long_month.cap_applied);
    }

    #[test]
    fn test_gross_rounds_to_cents() {
        let employee = create_test_employee(EmployeeType::PartTime, "33.333");
        let result = calculate_gross_pay(&employee, dec("10.5"), 1).unwrap();

        // 33.333 × 10.5 = 349.9965
        assert_eq!(result.gross_pay, dec("350.00"));
    }

    #[test]
    fn test_negative_units_rejected() {
        let employee = create_test_employee(EmployeeType::Contractor, "200");
        let result = calculate_gross_pay(&employee, dec("-1"), 1);

        assert!(matches!(
            result,
            Err(PayrollError::InvalidUnits { employee_id: 1, .. })
        ));
    }

    #[test]
    fn test_negative_units_rejected_for_full_time() {
        let employee = create_test_employee(EmployeeType::FullTime, "4000");
        assert!(calculate_gross_pay(&employee, dec("-0.5"), 1).is_err());
    }

    #[test]
    fn test_oversized_product_returns_overflow_error() {
        let employee = create_test_employee(EmployeeType::Contractor, "10000000000000000000000");
        let result = calculate_gross_pay(&employee, dec("100000000"), 1);

        match result {
            Err(PayrollError::AmountOverflow { calculation }) => {
                assert_eq!(calculation, "gross pay for employee 1");
            }
            other => panic!("Expected AmountOverflow, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_part_time_rate_returns_overflow_error() {
        let employee = create_test_employee(EmployeeType::PartTime, "10000000000000000000000000000");
        assert!(matches!(
            calculate_gross_pay(&employee, dec("80"), 1),
            Err(PayrollError::AmountOverflow { .. })
        ));
    }

    #[test]
    fn test_audit_step_records_inputs() {
        let employee = create_test_employee(EmployeeType::Contractor, "300");
        let result = calculate_gross_pay(&employee, dec("10"), 4).unwrap();

        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.rule_id, "gross_pay");
        assert_eq!(
            result.audit_step.input["employee_type"].as_str().unwrap(),
            "contractor"
        );
        assert_eq!(result.audit_step.input["unit"].as_str().unwrap(), "days");
        assert_eq!(
            result.audit_step.output["gross_pay"].as_str().unwrap(),
            "3000"
        );
    }
}
