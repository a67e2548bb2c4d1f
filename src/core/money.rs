//! Monetary rounding primitives.
//!
//! Every persisted or reported money value passes through [`round2`] exactly
//! once, at the point it is finalized. Intermediate sums stay unrounded.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Round to 2 decimal places, half away from zero (commercial rounding).
///
/// ```
/// use billbook::core::round2;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round2(dec!(2.675)), dec!(2.68));
/// assert_eq!(round2(dec!(-2.675)), dec!(-2.68));
/// assert_eq!(round2(dec!(1.004)), dec!(1.00));
/// ```
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `base * (percent / 100)`, unrounded. Saturates at the `Decimal` bounds.
pub fn percent_of(base: Decimal, percent: Decimal) -> Decimal {
    base.saturating_mul(percent / dec!(100))
}
