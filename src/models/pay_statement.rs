//! Pay statement models for the payroll engine.
//!
//! This module contains the [`PayStatement`] type and its associated structures
//! that capture all outputs from a pay calculation, including the ordered
//! deduction lines and the audit trace.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeType;

/// A deduction taken from gross pay.
///
/// Variants are declared in reporting order; [`Deductions`] relies on the
/// derived `Ord` to list them health insurance first, union dues last.
///
/// # Example
///
/// ```
/// use payroll_engine::models::DeductionKind;
///
/// assert!(DeductionKind::HealthInsurance < DeductionKind::Retirement);
/// assert_eq!(DeductionKind::UnionDues.label(), "Union Dues");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionKind {
    /// Flat health insurance premium, full-time employees only.
    HealthInsurance,
    /// Percentage-of-gross retirement contribution.
    Retirement,
    /// Flat union dues.
    UnionDues,
}

impl DeductionKind {
    /// Returns the snake_case key used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeductionKind::HealthInsurance => "health_insurance",
            DeductionKind::Retirement => "retirement",
            DeductionKind::UnionDues => "union_dues",
        }
    }

    /// Returns a human-readable label for report lines.
    pub fn label(&self) -> &'static str {
        match self {
            DeductionKind::HealthInsurance => "Health Insurance",
            DeductionKind::Retirement => "Retirement",
            DeductionKind::UnionDues => "Union Dues",
        }
    }
}

/// The ordered set of deductions that applied to a statement.
///
/// Only deductions that actually applied are present; a rule that did not
/// apply is missing rather than zero-valued.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deductions(BTreeMap<DeductionKind, Decimal>);

impl Deductions {
    /// Creates an empty deduction set.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, kind: DeductionKind, amount: Decimal) {
        self.0.insert(kind, amount);
    }

    /// Returns the amount for a deduction, if it applied.
    pub fn get(&self, kind: DeductionKind) -> Option<Decimal> {
        self.0.get(&kind).copied()
    }

    /// Returns true if the deduction applied.
    pub fn contains(&self, kind: DeductionKind) -> bool {
        self.0.contains_key(&kind)
    }

    /// Iterates deductions in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (DeductionKind, Decimal)> + '_ {
        self.0.iter().map(|(kind, amount)| (*kind, *amount))
    }

    /// Returns the sum of all applied deductions.
    pub fn total(&self) -> Decimal {
        self.0.values().copied().sum()
    }

    /// Returns the number of applied deductions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no deduction applied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A condition worth a reader's attention that did not stop the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditTrace;
///
/// let trace = AuditTrace::default();
/// assert!(trace.steps.is_empty());
/// assert!(trace.warnings.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The computed pay result for one employee for one monthly pay period.
///
/// The engine builds statements and exposes them through read-only
/// accessors, so a returned statement is an immutable snapshot. The employee
/// is referenced by id rather than copied.
///
/// `Deserialize` exists for reading API responses back. A deserialized
/// statement is taken as-is: its amounts are not recomputed, so
/// `net_pay == gross_pay - tax_amount - total_deductions()` holds only for
/// statements the engine produced.
///
/// `net_pay` is not clamped: when tax plus deductions exceed gross pay it is
/// negative, and [`PayStatement::is_net_negative`] reports that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayStatement {
    pub(crate) employee_id: u32,
    pub(crate) employee_type: EmployeeType,
    pub(crate) units_worked: Decimal,
    pub(crate) gross_pay: Decimal,
    pub(crate) tax_amount: Decimal,
    pub(crate) deductions: Deductions,
    pub(crate) net_pay: Decimal,
    pub(crate) audit_trace: AuditTrace,
}

impl PayStatement {
    /// The id of the employee this statement was computed for.
    pub fn employee_id(&self) -> u32 {
        self.employee_id
    }

    /// The employee type the gross-pay formula was chosen from.
    pub fn employee_type(&self) -> EmployeeType {
        self.employee_type
    }

    /// Hours (part-time) or days (contractor) supplied by the caller, uncapped.
    pub fn units_worked(&self) -> Decimal {
        self.units_worked
    }

    /// Pre-tax, pre-deduction pay for the period.
    pub fn gross_pay(&self) -> Decimal {
        self.gross_pay
    }

    /// Tax withheld under the progressive brackets.
    pub fn tax_amount(&self) -> Decimal {
        self.tax_amount
    }

    /// Deductions that applied, in reporting order.
    pub fn deductions(&self) -> &Deductions {
        &self.deductions
    }

    /// Gross pay minus tax minus all deductions.
    pub fn net_pay(&self) -> Decimal {
        self.net_pay
    }

    /// Steps and warnings recorded while computing this statement.
    pub fn audit_trace(&self) -> &AuditTrace {
        &self.audit_trace
    }

    /// Returns the sum of all deductions.
    pub fn total_deductions(&self) -> Decimal {
        self.deductions.total()
    }

    /// Returns true if tax and deductions exceeded gross pay.
    pub fn is_net_negative(&self) -> bool {
        self.net_pay < Decimal::ZERO
    }
}
