use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bonus_core::{EmployeeData, SplitOptimizer};
use bonus_data::{csv_loader, load_profile, write_search_path};
use clap::Parser;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod report;

use report::{OutputFormat, Report};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Annual bonus split optimizer.
///
/// Compares taxing the whole bonus separately, merging it into salary, and
/// the cheapest split between the two tracks. Amounts accept thousands
/// separators (`100,000`).
#[derive(Debug, Parser)]
#[command(name = "bonus-optimizer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Gross monthly salary.
    #[arg(
        long,
        value_parser = parse_amount,
        required_unless_present_any = ["profile", "batch"],
        conflicts_with_all = ["profile", "batch"]
    )]
    salary: Option<Decimal>,

    /// Whole-year bonus.
    #[arg(long, value_parser = parse_amount, conflicts_with_all = ["profile", "batch"])]
    bonus: Option<Decimal>,

    /// Monthly social insurance and housing fund contributions.
    #[arg(long, value_parser = parse_amount, conflicts_with_all = ["profile", "batch"])]
    social_insurance: Option<Decimal>,

    /// Monthly special additional deductions.
    #[arg(long, value_parser = parse_amount, conflicts_with_all = ["profile", "batch"])]
    additional: Option<Decimal>,

    /// Other monthly deductions.
    #[arg(long, value_parser = parse_amount, conflicts_with_all = ["profile", "batch"])]
    other: Option<Decimal>,

    /// Read the employee from a TOML profile instead of flags.
    #[arg(long, conflicts_with = "batch")]
    profile: Option<PathBuf>,

    /// Optimize every row of an employee CSV file.
    #[arg(long)]
    batch: Option<PathBuf>,

    /// Report format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also compute the exact optimum between grid points.
    #[arg(long, default_value_t = false)]
    exact: bool,

    /// Write the optimizer's search path to this CSV file.
    #[arg(long, conflicts_with = "batch")]
    search_path: Option<PathBuf>,

    /// Log filter (e.g. `debug`); overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    /// Employees to optimize, from the batch file, the profile, or the flags.
    fn employees(&self) -> Result<Vec<EmployeeData>> {
        if let Some(path) = &self.batch {
            return csv_loader::load_from_file(path)
                .with_context(|| format!("Failed to load batch: {}", path.display()));
        }

        if let Some(path) = &self.profile {
            let profile = load_profile(path)
                .with_context(|| format!("Failed to load profile: {}", path.display()))?;
            return Ok(vec![profile.employee]);
        }

        let employee = EmployeeData {
            monthly_salary: self.salary.unwrap_or_default(),
            annual_bonus: self.bonus.unwrap_or_default(),
            social_insurance: self.social_insurance.unwrap_or_default(),
            additional_deductions: self.additional.unwrap_or_default(),
            other_deductions: self.other.unwrap_or_default(),
        };
        employee.validate().context("Invalid employee input")?;
        Ok(vec![employee])
    }
}

// ─── amounts ─────────────────────────────────────────────────────────────────

/// Why a money flag was refused.
#[derive(Debug, Error)]
enum ParseAmountError {
    #[error("amount is empty")]
    Empty,

    #[error("'{input}' is not an amount: {source}")]
    NotANumber {
        input: String,
        source: rust_decimal::Error,
    },
}

/// Value parser for money flags. Commas are grouping only, so `100,000`
/// and `100000` are the same amount.
fn parse_amount(raw: &str) -> Result<Decimal, ParseAmountError> {
    let digits: String = raw.trim().chars().filter(|&c| c != ',').collect();
    if digits.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    Decimal::from_str_exact(&digits).map_err(|source| ParseAmountError::NotANumber {
        input: raw.to_owned(),
        source,
    })
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber on stderr.
///
/// * `--log-level` wins, then `RUST_LOG`.
/// * Falls back to `warn` so stdout carries only the report.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log level: {level}"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    let employees = cli.employees()?;
    info!(employees = employees.len(), "optimizing bonus splits");

    let optimizer = SplitOptimizer::statutory();
    let reports: Vec<Report> = employees
        .into_iter()
        .map(|employee| Report::build(&optimizer, employee, cli.exact))
        .collect();

    if let (Some(path), Some(report)) = (&cli.search_path, reports.first()) {
        let file = File::create(path)
            .with_context(|| format!("Failed to create: {}", path.display()))?;
        write_search_path(BufWriter::new(file), &report.summary.search_path)
            .with_context(|| format!("Failed to write search path: {}", path.display()))?;
        debug!(path = %path.display(), points = report.summary.search_path.len(), "wrote search path");
    }

    match cli.format {
        OutputFormat::Text => {
            for (idx, report) in reports.iter().enumerate() {
                if cli.batch.is_some() {
                    if idx > 0 {
                        println!();
                    }
                    println!("── Employee {} ──", idx + 1);
                }
                println!("{report}");
            }
        }
        OutputFormat::Json => {
            let json = match (cli.batch.is_some(), reports.as_slice()) {
                (false, [single]) => serde_json::to_string_pretty(single),
                _ => serde_json::to_string_pretty(&reports),
            }
            .context("Failed to serialize report")?;
            println!("{json}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // ─── amounts ───

    #[test]
    fn parse_amount_accepts_grouped_digits() {
        assert_eq!(parse_amount("1,234,567.89").unwrap(), dec!(1234567.89));
        assert_eq!(parse_amount(" 100,000 ").unwrap(), dec!(100000));
    }

    #[test]
    fn parse_amount_keeps_every_digit() {
        assert_eq!(
            parse_amount("12345678901234567.89").unwrap(),
            dec!(12345678901234567.89)
        );
    }

    #[test]
    fn parse_amount_refuses_blank_input() {
        assert!(matches!(parse_amount("  "), Err(ParseAmountError::Empty)));
    }

    #[test]
    fn parse_amount_refuses_words() {
        let err = parse_amount("12k").unwrap_err();

        assert!(err.to_string().starts_with("'12k' is not an amount"));
    }

    // ─── arguments ───

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_build_a_single_employee() {
        let cli = Cli::try_parse_from([
            "bonus-optimizer",
            "--salary",
            "18,000",
            "--bonus",
            "100,000",
            "--social-insurance",
            "3000",
            "--additional",
            "2500",
        ])
        .expect("valid flags");

        let employees = cli.employees().expect("valid employee");

        assert_eq!(
            employees,
            vec![EmployeeData {
                monthly_salary: dec!(18000),
                annual_bonus: dec!(100000),
                social_insurance: dec!(3000),
                additional_deductions: dec!(2500),
                other_deductions: dec!(0),
            }]
        );
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.exact);
    }

    #[test]
    fn salary_is_required_without_profile_or_batch() {
        let result = Cli::try_parse_from(["bonus-optimizer", "--bonus", "1000"]);

        assert!(result.is_err());
    }

    #[test]
    fn profile_conflicts_with_salary() {
        let result = Cli::try_parse_from([
            "bonus-optimizer",
            "--salary",
            "18000",
            "--profile",
            "me.toml",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn profile_conflicts_with_amount_flags() {
        for flag in ["--bonus", "--social-insurance", "--additional", "--other"] {
            let result =
                Cli::try_parse_from(["bonus-optimizer", "--profile", "me.toml", flag, "50000"]);

            assert!(result.is_err(), "{flag} should conflict with --profile");
        }
    }

    #[test]
    fn batch_conflicts_with_amount_flags() {
        let result =
            Cli::try_parse_from(["bonus-optimizer", "--batch", "staff.csv", "--bonus", "50000"]);

        assert!(result.is_err());
    }

    #[test]
    fn omitted_amount_flags_are_zero() {
        let cli = Cli::try_parse_from(["bonus-optimizer", "--salary", "9000"])
            .expect("valid flags");

        let employees = cli.employees().expect("valid employee");

        assert_eq!(
            employees,
            vec![EmployeeData {
                monthly_salary: dec!(9000),
                ..EmployeeData::default()
            }]
        );
    }

    #[test]
    fn search_path_conflicts_with_batch() {
        let result = Cli::try_parse_from([
            "bonus-optimizer",
            "--batch",
            "staff.csv",
            "--search-path",
            "path.csv",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn unparseable_amount_is_rejected_by_clap() {
        let result = Cli::try_parse_from(["bonus-optimizer", "--salary", "lots"]);

        assert!(result.is_err());
    }

    #[test]
    fn negative_flag_amount_fails_validation() {
        let cli = Cli::try_parse_from([
            "bonus-optimizer",
            "--salary",
            "18000",
            "--bonus=-1",
        ])
        .expect("clap accepts the value");

        let err = cli.employees().unwrap_err();

        assert!(format!("{err:#}").contains("annual_bonus"));
    }

    #[test]
    fn json_format_and_exact_flag_parse() {
        let cli = Cli::try_parse_from([
            "bonus-optimizer",
            "--salary",
            "18000",
            "--format",
            "json",
            "--exact",
        ])
        .expect("valid flags");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.exact);
    }
}
