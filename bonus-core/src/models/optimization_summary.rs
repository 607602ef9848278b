use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::models::CalculationResult;

/// One sampled split on the optimizer's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPoint {
    pub bonus_part: Decimal,
    pub total_tax: Decimal,
}

/// Everything the optimizer produces for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationSummary {
    /// Lowest-tax split seen, never worse than either boundary strategy.
    pub best_strategy: CalculationResult,

    pub all_bonus_strategy: CalculationResult,
    pub all_salary_strategy: CalculationResult,

    /// Tax saved by the best split relative to the worse boundary strategy.
    pub savings: Decimal,

    /// Total tax at every sampled split, ordered by `bonus_part` and ending at
    /// the full bonus amount.
    pub search_path: Vec<SearchPoint>,
}

impl fmt::Display for OptimizationSummary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "{:<30} {:>14} {:>14} {:>14} {:>14} {:>14}",
            "Strategy", "Bonus track", "Salary track", "Bonus tax", "Salary tax", "Total tax"
        )?;

        let rows = [
            &self.all_bonus_strategy,
            &self.all_salary_strategy,
            &self.best_strategy,
        ];
        for result in rows {
            writeln!(
                f,
                "{:<30} {:>14} {:>14} {:>14} {:>14} {:>14}",
                result.strategy_name(),
                round_half_up(result.bonus_as_taxable),
                round_half_up(result.salary_as_taxable),
                round_half_up(result.bonus_tax),
                round_half_up(result.salary_tax),
                round_half_up(result.total_tax),
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Net income (best): {}", round_half_up(self.best_strategy.net_income))?;
        write!(f, "Savings: {}", round_half_up(self.savings))
    }
}
