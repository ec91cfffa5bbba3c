//! Progressive tax calculation.
//!
//! Tax is marginal: each bracket's rate applies only to the portion of gross
//! pay that falls inside that bracket. The brackets are fixed for the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::round_currency;
use crate::error::{PayrollError, PayrollResult};
use crate::models::AuditStep;

/// One marginal tax bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Amount above which the bracket starts applying.
    pub lower: Decimal,
    /// Amount at which the bracket stops applying; `None` for the top bracket.
    pub upper: Option<Decimal>,
    /// Marginal rate as a fraction (0.10 = 10%).
    pub rate: Decimal,
}

/// Monthly tax brackets, lowest first.
///
/// | Range | Rate |
/// |---|---|
/// | 0 – 1,000 | 0% |
/// | 1,000 – 3,000 | 10% |
/// | 3,000 – 5,000 | 20% |
/// | above 5,000 | 30% |
pub const TAX_BRACKETS: [TaxBracket; 4] = [
    TaxBracket {
        lower: Decimal::ZERO,
        upper: Some(Decimal::from_parts(1000, 0, 0, false, 0)),
        rate: Decimal::ZERO,
    },
    TaxBracket {
        lower: Decimal::from_parts(1000, 0, 0, false, 0),
        upper: Some(Decimal::from_parts(3000, 0, 0, false, 0)),
        rate: Decimal::from_parts(10, 0, 0, false, 2),
    },
    TaxBracket {
        lower: Decimal::from_parts(3000, 0, 0, false, 0),
        upper: Some(Decimal::from_parts(5000, 0, 0, false, 0)),
        rate: Decimal::from_parts(20, 0, 0, false, 2),
    },
    TaxBracket {
        lower: Decimal::from_parts(5000, 0, 0, false, 0),
        upper: None,
        rate: Decimal::from_parts(30, 0, 0, false, 2),
    },
];

/// The share of gross pay taxed inside one bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketPortion {
    /// The bracket this portion falls in.
    pub bracket: TaxBracket,
    /// The amount of gross pay inside the bracket.
    pub taxable: Decimal,
    /// `taxable × rate`, before rounding.
    pub tax: Decimal,
}

/// The result of the bracket engine, including the audit step.
#[derive(Debug, Clone)]
pub struct TaxResult {
    /// Total tax rounded to cents.
    pub tax_amount: Decimal,
    /// Per-bracket contributions, one for each bracket the gross pay reaches.
    pub portions: Vec<BracketPortion>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates tax on a gross pay amount using [`TAX_BRACKETS`].
///
/// # Errors
///
/// Returns `NegativeGrossPay` if `gross_pay` is negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_tax;
/// use rust_decimal::Decimal;
///
/// // 0% on the first 1,000, 10% on the next 2,000, 20% on the last 1,000
/// let result = calculate_tax(Decimal::new(4000, 0), 1).unwrap();
/// assert_eq!(result.tax_amount, Decimal::new(400, 0));
/// assert_eq!(result.portions.len(), 3);
/// ```
pub fn calculate_tax(gross_pay: Decimal, step_number: u32) -> PayrollResult<TaxResult> {
    if gross_pay < Decimal::ZERO {
        return Err(PayrollError::NegativeGrossPay { amount: gross_pay });
    }

    let portions: Vec<BracketPortion> = TAX_BRACKETS
        .iter()
        .filter(|bracket| gross_pay > bracket.lower)
        .map(|bracket| {
            let top = match bracket.upper {
                Some(upper) => gross_pay.min(upper),
                None => gross_pay,
            };
            let taxable = top - bracket.lower;
            BracketPortion {
                bracket: *bracket,
                taxable,
                tax: taxable * bracket.rate,
            }
        })
        .collect();

    let unrounded: Decimal = portions.iter().map(|p| p.tax).sum();
    let tax_amount = round_currency(unrounded);

    let reasoning = if portions.is_empty() {
        "No taxable pay".to_string()
    } else {
        let parts: Vec<String> = portions
            .iter()
            .map(|p| {
                format!(
                    "${} × {}%",
                    p.taxable.normalize(),
                    (p.bracket.rate * Decimal::ONE_HUNDRED).normalize()
                )
            })
            .collect();
        format!("{} = ${}", parts.join(" + "), tax_amount)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "progressive_tax".to_string(),
        rule_name: "Progressive Tax".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.to_string()
        }),
        output: serde_json::json!({
            "brackets_reached": portions.len(),
            "tax_amount": tax_amount.to_string()
        }),
        reasoning,
    };

    Ok(TaxResult {
        tax_amount,
        portions,
        audit_step,
    })
}
