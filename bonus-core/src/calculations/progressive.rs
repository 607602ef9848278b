//! Tax on the two tracks.
//!
//! # Comprehensive track
//!
//! Annual taxable income is looked up in the comprehensive schedule and taxed
//! as `income * rate - quick_deduction`. The quick deductions make this equal
//! to summing each band's marginal rate, so the schedule is continuous.
//!
//! # Bonus track
//!
//! A separately taxed bonus is divided by twelve to find its band, and then
//! the *whole* bonus is taxed at that band's rate less one quick deduction.
//! Crossing a monthly-average limit by a single unit re-rates the entire
//! bonus, so the tax jumps at each of the six finite limits:
//!
//! | Bonus     | Monthly average | Rate | Tax     |
//! |-----------|-----------------|------|---------|
//! | 36,000    | 3,000.00        | 3%   | 1,080   |
//! | 36,001    | 3,000.08        | 10%  | 3,390.1 |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use bonus_core::{bonus_tax, comprehensive_tax};
//!
//! assert_eq!(comprehensive_tax(dec!(90000)), dec!(6480));
//! assert_eq!(bonus_tax(dec!(100000)), dec!(9790));
//! ```

use rust_decimal::Decimal;

use crate::calculations::brackets::{BONUS_BRACKETS, COMPREHENSIVE_BRACKETS, MONTHS_PER_YEAR};
use crate::models::BracketTable;

/// Tax on annual comprehensive income using the statutory schedule.
///
/// Non-positive income yields zero.
pub fn comprehensive_tax(taxable_income: Decimal) -> Decimal {
    comprehensive_tax_with(&COMPREHENSIVE_BRACKETS, taxable_income)
}

/// Tax on a separately taxed bonus using the statutory schedule.
///
/// Non-positive bonuses yield zero.
pub fn bonus_tax(bonus: Decimal) -> Decimal {
    bonus_tax_with(&BONUS_BRACKETS, bonus)
}

/// Tax on annual comprehensive income using `table`.
pub fn comprehensive_tax_with(
    table: &BracketTable<'_>,
    taxable_income: Decimal,
) -> Decimal {
    if taxable_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    table
        .find(taxable_income)
        .map_or(Decimal::ZERO, |bracket| bracket.apply(taxable_income))
}

/// Tax on a separately taxed bonus using `table`.
///
/// The band is selected by `bonus / 12`, then applied to the full bonus.
pub fn bonus_tax_with(
    table: &BracketTable<'_>,
    bonus: Decimal,
) -> Decimal {
    if bonus <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let monthly_average = bonus / MONTHS_PER_YEAR;
    table
        .find(monthly_average)
        .map_or(Decimal::ZERO, |bracket| bracket.apply(bonus))
}
