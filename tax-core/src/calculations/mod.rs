//! Income tax calculations.
//!
//! This module provides the bracket calculator and the shared rounding
//! helpers used when presenting its results.

pub mod common;
pub mod income_tax;

pub use income_tax::{IncomeTaxCalculator, IncomeTaxError, IncomeTaxResult, compute_tax};
