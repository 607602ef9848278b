mod calculation_result;
mod employee_data;
mod optimization_summary;
mod tax_bracket;

pub use calculation_result::{CalculationResult, Strategy};
pub use employee_data::{EmployeeData, EmployeeDataError};
pub use optimization_summary::{OptimizationSummary, SearchPoint};
pub use tax_bracket::{BracketTable, TaxBracket};
