//! Bonus split optimizer.
//!
//! A fixed annual bonus can be taxed separately on the bonus schedule, merged
//! into comprehensive income, or split between the two. Because the bonus
//! schedule jumps just past every monthly-average limit, total tax as a
//! function of the split is neither smooth nor convex.
//!
//! Two searches are offered:
//!
//! - [`SplitOptimizer::optimize`] scans a fixed grid of at least ~50 splits,
//!   records the tax at each one as the search path, and keeps the first
//!   lowest total. Its worst-case gap to the true optimum is about one grid
//!   step of tax.
//! - [`SplitOptimizer::optimize_exact`] evaluates only the splits where the
//!   optimum can sit: both endpoints, each bonus band limit, and each point
//!   where merged income reaches a comprehensive band limit.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use bonus_core::{EmployeeData, optimize};
//!
//! let data = EmployeeData {
//!     monthly_salary: dec!(18000),
//!     annual_bonus: dec!(100000),
//!     social_insurance: dec!(3000),
//!     additional_deductions: dec!(2500),
//!     other_deductions: dec!(0),
//! };
//!
//! let summary = optimize(&data);
//!
//! assert_eq!(summary.all_salary_strategy.total_tax, dec!(21080));
//! assert_eq!(summary.best_strategy.total_tax, dec!(14960));
//! assert_eq!(summary.best_strategy.bonus_as_taxable, dec!(36000));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, trace};

use crate::calculations::brackets::{
    BONUS_BRACKETS, COMPREHENSIVE_BRACKETS, MONTHS_PER_YEAR, STANDARD_DEDUCTION,
};
use crate::calculations::common::max;
use crate::calculations::progressive::{bonus_tax_with, comprehensive_tax_with};
use crate::models::{
    BracketTable, CalculationResult, EmployeeData, OptimizationSummary, SearchPoint, Strategy,
};

/// Smallest grid step, in currency units.
const MIN_STEP: Decimal = dec!(100);

/// Target number of grid intervals across the bonus.
const GRID_INTERVALS: Decimal = dec!(50);

/// Searches for the lowest-tax split of an annual bonus.
///
/// Borrows its two schedules, so it is cheap to construct per request.
#[derive(Debug, Clone, Copy)]
pub struct SplitOptimizer<'a> {
    comprehensive: BracketTable<'a>,
    bonus: BracketTable<'a>,
    standard_deduction: Decimal,
}

impl SplitOptimizer<'static> {
    /// Optimizer using the statutory schedules and standard deduction.
    pub fn statutory() -> Self {
        Self::new(COMPREHENSIVE_BRACKETS, BONUS_BRACKETS, STANDARD_DEDUCTION)
    }
}

impl Default for SplitOptimizer<'static> {
    fn default() -> Self {
        Self::statutory()
    }
}

impl<'a> SplitOptimizer<'a> {
    pub fn new(
        comprehensive: BracketTable<'a>,
        bonus: BracketTable<'a>,
        standard_deduction: Decimal,
    ) -> Self {
        Self {
            comprehensive,
            bonus,
            standard_deduction,
        }
    }

    /// Annual comprehensive taxable income before any bonus is merged in.
    ///
    /// Salary, social insurance, additional and other deductions are all
    /// monthly and scaled to a year; the result is clamped at zero.
    pub fn annual_base_taxable(
        &self,
        data: &EmployeeData,
    ) -> Decimal {
        let annual_salary = data.monthly_salary * MONTHS_PER_YEAR;
        let annual_deductions = (data.social_insurance
            + data.additional_deductions
            + data.other_deductions)
            * MONTHS_PER_YEAR;

        max(
            annual_salary - self.standard_deduction - annual_deductions,
            Decimal::ZERO,
        )
    }

    /// Grid step for a bonus: one fiftieth of it, floored, but never below 100.
    pub fn grid_step(annual_bonus: Decimal) -> Decimal {
        max(MIN_STEP, (annual_bonus / GRID_INTERVALS).floor())
    }

    /// Scans the split grid and summarizes the outcome.
    ///
    /// The search path holds one point per grid split in increasing order of
    /// the bonus part, and always ends at the full bonus. The best strategy
    /// is the first split with the lowest total, and is never worse than
    /// taxing the whole bonus either way.
    pub fn optimize(
        &self,
        data: &EmployeeData,
    ) -> OptimizationSummary {
        let evaluator = self.evaluator(data);
        let annual_bonus = data.annual_bonus;

        let all_bonus = evaluator.evaluate(annual_bonus, Decimal::ZERO, Strategy::AllBonus);
        let all_salary = evaluator.evaluate(Decimal::ZERO, annual_bonus, Strategy::AllSalary);

        let step = Self::grid_step(annual_bonus);
        debug!(
            %annual_bonus,
            base = %evaluator.base_taxable,
            %step,
            "scanning bonus splits"
        );

        let mut search_path = Vec::new();
        let mut best: Option<CalculationResult> = None;
        let mut bonus_part = Decimal::ZERO;

        while bonus_part <= annual_bonus {
            let current =
                evaluator.evaluate(bonus_part, annual_bonus - bonus_part, Strategy::OptimalSplit);
            trace!(%bonus_part, total_tax = %current.total_tax, "sampled split");

            search_path.push(SearchPoint {
                bonus_part,
                total_tax: current.total_tax,
            });
            if best
                .as_ref()
                .is_none_or(|b| current.total_tax < b.total_tax)
            {
                best = Some(current);
            }

            bonus_part += step;
        }

        if search_path
            .last()
            .is_none_or(|point| point.bonus_part != annual_bonus)
        {
            search_path.push(SearchPoint {
                bonus_part: annual_bonus,
                total_tax: all_bonus.total_tax,
            });
        }

        // The all-bonus endpoint sits at the far right of the grid, so it
        // only wins when strictly lower than everything scanned.
        let best_strategy = match best {
            Some(scanned) if scanned.total_tax <= all_bonus.total_tax => scanned,
            _ => all_bonus.clone(),
        };

        let savings =
            max(all_bonus.total_tax, all_salary.total_tax) - best_strategy.total_tax;

        debug!(
            bonus_part = %best_strategy.bonus_as_taxable,
            total_tax = %best_strategy.total_tax,
            %savings,
            samples = search_path.len(),
            "selected split"
        );

        OptimizationSummary {
            best_strategy,
            all_bonus_strategy: all_bonus,
            all_salary_strategy: all_salary,
            savings,
            search_path,
        }
    }

    /// Finds the exact lowest-tax split.
    ///
    /// Inside one bonus band the bonus tax is linear in the bonus part and the
    /// comprehensive tax on the remainder is convex, so the minimum over that
    /// band sits at its upper limit or at a comprehensive band limit. Just past
    /// a bonus band limit the tax jumps up, so the lower end of a band never
    /// beats the limit below it. Evaluating those points and both endpoints
    /// covers every possible optimum. Ties resolve to the smallest bonus part.
    ///
    /// This relies on the comprehensive schedule having non-decreasing rates
    /// and the bonus schedule jumping upward at each limit, as the statutory
    /// schedules do.
    pub fn optimize_exact(
        &self,
        data: &EmployeeData,
    ) -> CalculationResult {
        let evaluator = self.evaluator(data);
        let annual_bonus = data.annual_bonus;

        let candidates = self.exact_candidates(annual_bonus, evaluator.base_taxable);
        debug!(%annual_bonus, candidates = candidates.len(), "evaluating exact candidates");

        let mut best = evaluator.evaluate(annual_bonus, Decimal::ZERO, Strategy::ExactSplit);
        let mut best_part = annual_bonus;
        for bonus_part in candidates {
            let current =
                evaluator.evaluate(bonus_part, annual_bonus - bonus_part, Strategy::ExactSplit);
            let better = current.total_tax < best.total_tax
                || (current.total_tax == best.total_tax && bonus_part < best_part);
            if better {
                best_part = bonus_part;
                best = current;
            }
        }

        debug!(bonus_part = %best.bonus_as_taxable, total_tax = %best.total_tax, "exact split");
        best
    }

    /// Bonus parts at which the exact optimum can occur, sorted and unique.
    fn exact_candidates(
        &self,
        annual_bonus: Decimal,
        base_taxable: Decimal,
    ) -> Vec<Decimal> {
        if annual_bonus <= Decimal::ZERO {
            return vec![annual_bonus];
        }

        let interior = |part: &Decimal| *part > Decimal::ZERO && *part < annual_bonus;

        let bonus_limits = self
            .bonus
            .limits()
            .map(|limit| limit * MONTHS_PER_YEAR)
            .filter(interior);
        let merge_limits = self
            .comprehensive
            .limits()
            .map(|limit| annual_bonus + base_taxable - limit)
            .filter(interior);

        let mut candidates: Vec<Decimal> = [Decimal::ZERO, annual_bonus]
            .into_iter()
            .chain(bonus_limits)
            .chain(merge_limits)
            .collect();
        candidates.sort();
        candidates.dedup();
        candidates
    }

    fn evaluator<'o>(
        &'o self,
        data: &'o EmployeeData,
    ) -> SplitEvaluator<'o, 'a> {
        SplitEvaluator {
            optimizer: self,
            data,
            base_taxable: self.annual_base_taxable(data),
            gross_less_insurance: data.annual_gross() - data.annual_social_insurance(),
        }
    }
}

/// Per-request state shared by every split evaluation.
struct SplitEvaluator<'o, 'a> {
    optimizer: &'o SplitOptimizer<'a>,
    data: &'o EmployeeData,
    base_taxable: Decimal,
    gross_less_insurance: Decimal,
}

impl SplitEvaluator<'_, '_> {
    fn evaluate(
        &self,
        bonus_part: Decimal,
        salary_part: Decimal,
        strategy: Strategy,
    ) -> CalculationResult {
        let salary_tax =
            comprehensive_tax_with(&self.optimizer.comprehensive, self.base_taxable + salary_part);
        let bonus_tax = bonus_tax_with(&self.optimizer.bonus, bonus_part);
        let total_tax = salary_tax + bonus_tax;

        debug_assert_eq!(bonus_part + salary_part, self.data.annual_bonus);

        CalculationResult {
            strategy,
            bonus_as_taxable: bonus_part,
            salary_as_taxable: salary_part,
            total_tax,
            net_income: self.gross_less_insurance - total_tax,
            bonus_tax,
            salary_tax,
        }
    }
}

/// Runs [`SplitOptimizer::optimize`] with the statutory schedules.
pub fn optimize(data: &EmployeeData) -> OptimizationSummary {
    SplitOptimizer::statutory().optimize(data)
}

/// Runs [`SplitOptimizer::optimize_exact`] with the statutory schedules.
pub fn optimize_exact(data: &EmployeeData) -> CalculationResult {
    SplitOptimizer::statutory().optimize_exact(data)
}
