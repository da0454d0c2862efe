//! Common arithmetic helpers shared by the calculators.
//!
//! Calculators work on exact decimals; rounding to cents happens once, at
//! display time, through [`round_half_up`].

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the smallest of three decimal values.
pub fn min3(
    a: Decimal,
    b: Decimal,
    c: Decimal,
) -> Decimal {
    a.min(b).min(c)
}

/// Number of whole or partial `step`s needed to cover `amount`.
///
/// Non-positive amounts need zero steps. The quotient is exact decimal
/// division, so there is no off-by-one drift at step boundaries.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::ceil_div;
///
/// assert_eq!(ceil_div(dec!(3000), dec!(1000)), dec!(3));
/// assert_eq!(ceil_div(dec!(3000.01), dec!(1000)), dec!(4));
/// assert_eq!(ceil_div(dec!(0), dec!(1000)), dec!(0));
/// ```
pub fn ceil_div(
    amount: Decimal,
    step: Decimal,
) -> Decimal {
    if amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (amount / step).ceil()
}
