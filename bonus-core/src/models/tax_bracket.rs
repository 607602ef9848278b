use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One band of a quick-deduction rate schedule.
///
/// Tax inside the band is `amount * rate - quick_deduction`. An `upper_limit`
/// of `None` marks the final, unbounded band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub upper_limit: Option<Decimal>,
    pub rate: Decimal,
    pub quick_deduction: Decimal,
}

impl TaxBracket {
    /// Returns true if `amount` falls at or below this band's upper limit.
    pub fn contains(
        &self,
        amount: Decimal,
    ) -> bool {
        self.upper_limit.is_none_or(|limit| amount <= limit)
    }

    /// Applies this band's rate and quick deduction to `amount`.
    pub fn apply(
        &self,
        amount: Decimal,
    ) -> Decimal {
        amount * self.rate - self.quick_deduction
    }
}

/// An ordered, immutable rate schedule.
///
/// Brackets must be sorted by `upper_limit` ascending, with the unbounded
/// band last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketTable<'a> {
    brackets: &'a [TaxBracket],
}

impl<'a> BracketTable<'a> {
    pub const fn new(brackets: &'a [TaxBracket]) -> Self {
        Self { brackets }
    }

    pub fn brackets(&self) -> &'a [TaxBracket] {
        self.brackets
    }

    /// Finds the first band whose upper limit is not exceeded by `amount`.
    ///
    /// Falls back to the top band when nothing matches, and returns `None`
    /// only for an empty table.
    pub fn find(
        &self,
        amount: Decimal,
    ) -> Option<&'a TaxBracket> {
        self.brackets
            .iter()
            .find(|b| b.contains(amount))
            .or_else(|| self.brackets.last())
    }

    /// Finite upper limits in ascending order.
    pub fn limits(&self) -> impl Iterator<Item = Decimal> + 'a {
        self.brackets.iter().filter_map(|b| b.upper_limit)
    }

    /// Checks whether the schedule is continuous at every boundary when each
    /// band is applied to `scale` times its limit.
    ///
    /// A progressive annual schedule is continuous with `scale = 1`. The
    /// bonus schedule, which is looked up by monthly average but applied to
    /// the whole bonus, is checked with `scale = 12` and is not.
    pub fn is_continuous(
        &self,
        scale: Decimal,
    ) -> bool {
        self.brackets.windows(2).all(|pair| match pair[0].upper_limit {
            Some(limit) => {
                let amount = limit * scale;
                pair[0].apply(amount) == pair[1].apply(amount)
            }
            None => false,
        })
    }
}
