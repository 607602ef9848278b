use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by [`EmployeeData::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmployeeDataError {
    /// A monetary field was below zero.
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: Decimal },
}

/// Compensation and deduction figures for one employee.
///
/// `annual_bonus` is a yearly amount; every other field is monthly. Unknown
/// keys are rejected when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmployeeData {
    /// Gross monthly salary.
    pub monthly_salary: Decimal,

    /// Total annual bonus to be split between the two tracks.
    pub annual_bonus: Decimal,

    /// Monthly social insurance and housing fund contributions.
    pub social_insurance: Decimal,

    /// Monthly special additional deductions (child education, elderly care, ...).
    #[serde(default)]
    pub additional_deductions: Decimal,

    /// Any other monthly deductions.
    #[serde(default)]
    pub other_deductions: Decimal,
}

impl EmployeeData {
    /// Salary plus bonus for the year, before any deduction.
    pub fn annual_gross(&self) -> Decimal {
        self.monthly_salary * Decimal::from(12) + self.annual_bonus
    }

    /// Social insurance for the year.
    pub fn annual_social_insurance(&self) -> Decimal {
        self.social_insurance * Decimal::from(12)
    }

    /// Checks that every field is non-negative.
    ///
    /// The tax engine itself accepts any value and clamps non-positive
    /// taxable amounts to zero tax; loaders call this before optimizing so
    /// that bad input is rejected instead of producing a meaningless result.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeDataError::Negative`] for the first negative field.
    pub fn validate(&self) -> Result<(), EmployeeDataError> {
        let fields = [
            ("monthly_salary", self.monthly_salary),
            ("annual_bonus", self.annual_bonus),
            ("social_insurance", self.social_insurance),
            ("additional_deductions", self.additional_deductions),
            ("other_deductions", self.other_deductions),
        ];

        match fields.into_iter().find(|(_, value)| *value < Decimal::ZERO) {
            Some((field, value)) => Err(EmployeeDataError::Negative { field, value }),
            None => Ok(()),
        }
    }
}
