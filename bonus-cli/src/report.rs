//! Per-employee report printed by the CLI, as text or JSON.

use std::fmt;

use bonus_core::calculations::common::round_half_up;
use bonus_core::{CalculationResult, EmployeeData, OptimizationSummary, SplitOptimizer};
use clap::ValueEnum;
use serde::Serialize;

/// Output format for reports on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Input echo, grid summary and (optionally) the exact optimum for one employee.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub employee: EmployeeData,
    pub summary: OptimizationSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<CalculationResult>,
}

impl Report {
    pub fn build(
        optimizer: &SplitOptimizer<'_>,
        employee: EmployeeData,
        exact: bool,
    ) -> Self {
        let summary = optimizer.optimize(&employee);
        let exact = exact.then(|| optimizer.optimize_exact(&employee));
        Self {
            employee,
            summary,
            exact,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let e = &self.employee;
        writeln!(
            f,
            "Monthly salary: {}  Annual bonus: {}  Social insurance: {}  Deductions: {} + {}",
            e.monthly_salary,
            e.annual_bonus,
            e.social_insurance,
            e.additional_deductions,
            e.other_deductions,
        )?;
        writeln!(f)?;
        write!(f, "{}", self.summary)?;

        if let Some(exact) = &self.exact {
            writeln!(f)?;
            write!(
                f,
                "{}: bonus track {} / salary track {}, total tax {}",
                exact.strategy_name(),
                round_half_up(exact.bonus_as_taxable),
                round_half_up(exact.salary_as_taxable),
                round_half_up(exact.total_tax),
            )?;
        }
        Ok(())
    }
}
