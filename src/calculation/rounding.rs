//! Currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to whole cents, half away from zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("55.555").unwrap()), Decimal::from_str("55.56").unwrap());
/// assert_eq!(round_currency(Decimal::from_str("55.554").unwrap()), Decimal::from_str("55.55").unwrap());
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
