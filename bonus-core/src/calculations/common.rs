//! Small helpers shared by the tax engine and the optimizer.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to cents, half away from zero.
///
/// The engine itself keeps full precision; this is applied only when
/// amounts are rendered.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use bonus_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(8333.3333)), dec!(8333.33));
/// assert_eq!(round_half_up(dec!(1080.005)), dec!(1080.01));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two amounts.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use bonus_core::calculations::common::max;
///
/// assert_eq!(max(dec!(-4000), dec!(0)), dec!(0));
/// assert_eq!(max(dec!(90000), dec!(0)), dec!(90000));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_truncates_monthly_average() {
        // 100000 / 12
        let result = round_half_up(dec!(8333.333333333333333333333333));

        assert_eq!(result, dec!(8333.33));
    }

    #[test]
    fn round_half_up_rounds_midpoint_away_from_zero() {
        assert_eq!(round_half_up(dec!(2999.915)), dec!(2999.92));
        assert_eq!(round_half_up(dec!(-2999.915)), dec!(-2999.92));
    }

    #[test]
    fn round_half_up_keeps_whole_amounts() {
        assert_eq!(round_half_up(dec!(21080)), dec!(21080));
    }

    // =========================================================================
    // max tests
    // =========================================================================

    #[test]
    fn max_clamps_negative_base_to_zero() {
        assert_eq!(max(dec!(-12000), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn max_prefers_larger_tax() {
        assert_eq!(max(dec!(25070), dec!(21080)), dec!(25070));
        assert_eq!(max(dec!(21080), dec!(25070)), dec!(25070));
    }

    #[test]
    fn max_handles_equal_values() {
        assert_eq!(max(dec!(1080), dec!(1080)), dec!(1080));
    }
}
