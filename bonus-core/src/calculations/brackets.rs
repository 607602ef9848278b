//! Statutory rate schedules (2024).
//!
//! Both schedules have seven bands with an unbounded top band. The
//! comprehensive schedule is indexed by annual taxable income; the bonus
//! schedule is indexed by the bonus's monthly average but applied to the
//! whole bonus.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{BracketTable, TaxBracket};

/// Annual basic deduction (5,000 per month).
pub const STANDARD_DEDUCTION: Decimal = dec!(60000);

/// Months used to spread an annual bonus into a monthly average.
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

const fn band(
    upper_limit: Option<Decimal>,
    rate: Decimal,
    quick_deduction: Decimal,
) -> TaxBracket {
    TaxBracket {
        upper_limit,
        rate,
        quick_deduction,
    }
}

static COMPREHENSIVE: [TaxBracket; 7] = [
    band(Some(dec!(36000)), dec!(0.03), dec!(0)),
    band(Some(dec!(144000)), dec!(0.10), dec!(2520)),
    band(Some(dec!(300000)), dec!(0.20), dec!(16920)),
    band(Some(dec!(420000)), dec!(0.25), dec!(31920)),
    band(Some(dec!(660000)), dec!(0.30), dec!(52920)),
    band(Some(dec!(960000)), dec!(0.35), dec!(85920)),
    band(None, dec!(0.45), dec!(181920)),
];

static BONUS: [TaxBracket; 7] = [
    band(Some(dec!(3000)), dec!(0.03), dec!(0)),
    band(Some(dec!(12000)), dec!(0.10), dec!(210)),
    band(Some(dec!(25000)), dec!(0.20), dec!(1410)),
    band(Some(dec!(35000)), dec!(0.25), dec!(2660)),
    band(Some(dec!(55000)), dec!(0.30), dec!(4410)),
    band(Some(dec!(80000)), dec!(0.35), dec!(7160)),
    band(None, dec!(0.45), dec!(15160)),
];

/// Annual comprehensive income schedule.
pub static COMPREHENSIVE_BRACKETS: BracketTable<'static> = BracketTable::new(&COMPREHENSIVE);

/// Annual one-off bonus schedule, looked up by monthly average.
pub static BONUS_BRACKETS: BracketTable<'static> = BracketTable::new(&BONUS);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn both_schedules_have_seven_bands_ending_unbounded() {
        for table in [COMPREHENSIVE_BRACKETS, BONUS_BRACKETS] {
            assert_eq!(table.brackets().len(), 7);
            assert_eq!(table.brackets()[6].upper_limit, None);
        }
    }

    #[test]
    fn schedules_are_sorted_ascending() {
        for table in [COMPREHENSIVE_BRACKETS, BONUS_BRACKETS] {
            let limits: Vec<_> = table.limits().collect();
            assert!(limits.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn comprehensive_schedule_is_continuous_at_every_boundary() {
        assert!(COMPREHENSIVE_BRACKETS.is_continuous(Decimal::ONE));
    }

    #[test]
    fn bonus_schedule_jumps_at_boundaries_when_applied_to_whole_bonus() {
        assert!(!BONUS_BRACKETS.is_continuous(MONTHS_PER_YEAR));
    }

    #[test]
    fn bonus_quick_deductions_are_one_twelfth_of_annual_equivalents() {
        // The bonus schedule reuses the monthly-converted comprehensive rates,
        // but its quick deductions are not scaled back up by twelve.
        let rates: Vec<_> = BONUS_BRACKETS.brackets().iter().map(|b| b.rate).collect();
        let annual_rates: Vec<_> = COMPREHENSIVE_BRACKETS
            .brackets()
            .iter()
            .map(|b| b.rate)
            .collect();

        assert_eq!(rates, annual_rates);
        for (bonus, annual) in BONUS_BRACKETS
            .brackets()
            .iter()
            .zip(COMPREHENSIVE_BRACKETS.brackets())
        {
            assert_eq!(bonus.quick_deduction * MONTHS_PER_YEAR, annual.quick_deduction);
        }
    }
}
