//! CSV loader for batches of employee records.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Header
//! names are case-sensitive. Whitespace around values is trimmed.
//!
//! | Column                  | Required | Type    | Notes                            |
//! |-------------------------|----------|---------|----------------------------------|
//! | `monthly_salary`        | yes      | decimal | Gross monthly salary             |
//! | `annual_bonus`          | yes      | decimal | Whole-year bonus                 |
//! | `social_insurance`      | yes      | decimal | Monthly contributions            |
//! | `additional_deductions` | no       | decimal | Monthly; empty or missing is `0` |
//! | `other_deductions`      | no       | decimal | Monthly; empty or missing is `0` |
//!
//! ### Example
//!
//! ```csv
//! monthly_salary,annual_bonus,social_insurance,additional_deductions,other_deductions
//! 18000,100000,3000,2500,
//! 9500.50,24000,1200,,
//! ```
//!
//! Every row is validated with [`EmployeeData::validate`]; a negative amount
//! fails the whole load and reports the 1-based data row.

use std::path::Path;

use bonus_core::{EmployeeData, EmployeeDataError};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

// Amounts go through the cell text so they never pass through `f64`.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(with = "rust_decimal::serde::str")]
    monthly_salary: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    annual_bonus: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    social_insurance: Decimal,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    additional_deductions: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    other_deductions: Option<Decimal>,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading employee records from CSV.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, non-numeric amount, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A row parsed but holds an amount the optimizer should not see.
    #[error("invalid employee on row {row}: {source}")]
    InvalidEmployee {
        row: usize,
        #[source]
        source: EmployeeDataError,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Convert a single CSV row into validated [`EmployeeData`].
///
/// `row_number` is 1-based (for error messages).
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<EmployeeData, CsvLoadError> {
    let data = EmployeeData {
        monthly_salary: row.monthly_salary,
        annual_bonus: row.annual_bonus,
        social_insurance: row.social_insurance,
        additional_deductions: row.additional_deductions.unwrap_or_default(),
        other_deductions: row.other_deductions.unwrap_or_default(),
    };

    data.validate().map_err(|source| {
        warn!(row = row_number, %source, "rejecting employee row");
        CsvLoadError::InvalidEmployee {
            row: row_number,
            source,
        }
    })?;

    Ok(data)
}

/// Parse CSV text and return the employee records in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid or an amount
///   cannot be deserialised.
/// * [`CsvLoadError::InvalidEmployee`] if any row holds a negative amount.
pub fn load_from_str(input: &str) -> Result<Vec<EmployeeData>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let employees = reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(rows = employees.len(), "loaded employee CSV");
    Ok(employees)
}

/// Read a file from disk and delegate to [`load_from_str`].
///
/// # Errors
///
/// Returns [`CsvLoadError::Io`] when the file cannot be read, or any error
/// from [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<EmployeeData>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
