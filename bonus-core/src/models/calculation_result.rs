use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a bonus was allocated between the two tax tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// The whole bonus taxed separately on the bonus schedule.
    AllBonus,
    /// The whole bonus merged into comprehensive income.
    AllSalary,
    /// Best split found by the grid scan.
    OptimalSplit,
    /// Best split found by evaluating every boundary candidate.
    ExactSplit,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AllBonus => "All bonus taxed separately",
            Self::AllSalary => "All bonus merged into salary",
            Self::OptimalSplit => "Optimal split",
            Self::ExactSplit => "Exact optimal split",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tax outcome of one bonus split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub strategy: Strategy,

    /// Portion of the bonus taxed on the bonus schedule.
    pub bonus_as_taxable: Decimal,

    /// Portion of the bonus merged into comprehensive income.
    pub salary_as_taxable: Decimal,

    /// `salary_tax + bonus_tax`.
    pub total_tax: Decimal,

    /// Annual gross minus annual social insurance minus total tax.
    pub net_income: Decimal,

    pub bonus_tax: Decimal,
    pub salary_tax: Decimal,
}

impl CalculationResult {
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}
