pub mod calculations;
pub mod models;

pub use calculations::{IncomeTaxCalculator, IncomeTaxError, IncomeTaxResult, compute_tax};
pub use models::*;
