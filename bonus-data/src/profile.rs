//! TOML employee profiles.
//!
//! A profile describes one employee under an `[employee]` table, using the
//! same field names as the CSV loader:
//!
//! ```toml
//! [employee]
//! monthly_salary = 18000
//! annual_bonus = 100000
//! social_insurance = 3000
//! additional_deductions = 2500
//! ```
//!
//! `additional_deductions` and `other_deductions` default to zero.

use std::path::Path;

use bonus_core::{EmployeeData, EmployeeDataError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("cannot read profile '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid profile TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid employee in profile: {0}")]
    InvalidEmployee(#[from] EmployeeDataError),
}

/// Contents of a profile file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub employee: EmployeeData,
}

/// Parses and validates a profile from TOML text.
///
/// # Errors
///
/// Returns [`ProfileError::Parse`] for malformed TOML or missing fields, and
/// [`ProfileError::InvalidEmployee`] for negative amounts.
pub fn load_profile_from_str(input: &str) -> Result<Profile, ProfileError> {
    let profile: Profile = toml::from_str(input)?;
    profile.employee.validate()?;
    Ok(profile)
}

/// Reads a profile file and delegates to [`load_profile_from_str`].
///
/// # Errors
///
/// Returns [`ProfileError::Io`] when the file cannot be read, or any error
/// from [`load_profile_from_str`].
pub fn load_profile(path: &Path) -> Result<Profile, ProfileError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
        path: path.display().to_string(),
        source,
    })?;

    debug!(path = %path.display(), "loading profile");
    load_profile_from_str(&contents)
}
