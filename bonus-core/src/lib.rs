pub mod calculations;
pub mod models;

pub use calculations::{
    SplitOptimizer, bonus_tax, comprehensive_tax, optimize, optimize_exact,
};
pub use models::*;
