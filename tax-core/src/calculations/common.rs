//! Common rounding helpers for presenting tax results.
//!
//! Calculations never round; these are applied only when a value is shown.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(5092.515)), dec!(5092.52));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a rate such as `0.325` into a percentage rounded to two places.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::as_percentage;
///
/// assert_eq!(as_percentage(dec!(0.325)), dec!(32.50));
/// ```
pub fn as_percentage(rate: Decimal) -> Decimal {
    round_half_up(rate * Decimal::ONE_HUNDRED)
}
