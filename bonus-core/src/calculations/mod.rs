//! Tax evaluation and bonus split search.
//!
//! [`progressive`] computes tax on each track against a [`BracketTable`],
//! [`brackets`] holds the statutory schedules, and [`optimizer`] searches the
//! splits of a bonus between the two tracks.
//!
//! [`BracketTable`]: crate::models::BracketTable

pub mod brackets;
pub mod common;
pub mod optimizer;
pub mod progressive;

pub use brackets::{BONUS_BRACKETS, COMPREHENSIVE_BRACKETS, STANDARD_DEDUCTION};
pub use optimizer::{SplitOptimizer, optimize, optimize_exact};
pub use progressive::{bonus_tax, bonus_tax_with, comprehensive_tax, comprehensive_tax_with};
