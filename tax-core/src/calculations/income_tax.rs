//! Progressive income tax calculation over an ordered bracket table.
//!
//! # Algorithm
//!
//! For each bounded bracket a tranche is precomputed as
//! `(max_income - min_income + 1) * tax_rate`. The base tax of bracket `i` is
//! the sum of the tranches of every bracket below it. For an income `x`:
//!
//! | Condition (resident table) | Tax |
//! |----------------------------|-----|
//! | `18200 < x < 45001` | `(x - 18200) * 0.19` |
//! | `45000 < x < 120001` | `(x - 45000) * 0.325 + tranche1` |
//! | `120000 < x < 180001` | `(x - 120000) * 0.37 + tranche2 + tranche1` |
//! | `x > 180000` | `(x - 180000) * 0.45 + tranche3 + tranche2 + tranche1` |
//! | otherwise | `0` |
//!
//! Every condition is tested in table order and the last match wins, so a
//! fractional income such as `45000.5` is taxed in the second bracket while
//! `45000` stays in the first.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::IncomeTaxCalculator;
//!
//! let calculator = IncomeTaxCalculator::resident();
//! let result = calculator.calculate(dec!(45001));
//!
//! assert_eq!(result.tax, dec!(5092.515));
//! assert_eq!(result.bracket, Some(1));
//! assert_eq!(result.marginal_rate, dec!(0.325));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use crate::models::{RESIDENT_BRACKETS, TaxBracket};

/// Errors raised when validating a custom bracket table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IncomeTaxError {
    /// No tax brackets were provided.
    #[error("no tax brackets provided")]
    NoTaxBrackets,

    /// A bracket other than the last has no upper bound.
    #[error("bracket {0} has no upper bound but is not the last bracket")]
    UnboundedBracket(usize),

    /// The last bracket has an upper bound, leaving higher incomes untaxed.
    #[error("last bracket {0} must have no upper bound")]
    BoundedLastBracket(usize),

    /// A bracket ends at or below its own lower bound, or does not start
    /// where the previous one ends.
    #[error("bracket {0} is out of order")]
    UnorderedBrackets(usize),
}

/// Outcome of a single income tax calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxResult {
    /// The income the tax was calculated for.
    pub taxable_income: Decimal,

    /// Tax owed. Not rounded.
    pub tax: Decimal,

    /// Zero-based index of the bracket applied, `None` when no tax is owed
    /// because the income is at or below the first threshold.
    pub bracket: Option<usize>,

    /// Sum of the tranches below the applied bracket.
    pub base_tax: Decimal,

    /// Rate applied to the income above the bracket threshold.
    pub marginal_rate: Decimal,

    /// `tax / taxable_income`, zero for non-positive income.
    pub effective_rate: Decimal,
}

/// Calculator for progressive income tax.
///
/// Holds a bracket table together with the precomputed base tax of each
/// bracket.
#[derive(Debug, Clone)]
pub struct IncomeTaxCalculator<'a> {
    tax_brackets: &'a [TaxBracket],
    base_taxes: Vec<Decimal>,
}

impl IncomeTaxCalculator<'static> {
    /// Creates a calculator over [`RESIDENT_BRACKETS`].
    pub fn resident() -> Self {
        Self::build(&RESIDENT_BRACKETS)
    }
}

impl<'a> IncomeTaxCalculator<'a> {
    /// Creates a calculator over a custom bracket table.
    ///
    /// Brackets must be sorted ascending and contiguous. Every bracket but the
    /// last must be bounded; the last must be open.
    ///
    /// # Errors
    ///
    /// Returns [`IncomeTaxError`] if the table is empty, has an open bracket
    /// before the end, ends in a bounded bracket, has a bracket whose upper
    /// bound is not above its lower bound, or has a gap or overlap between
    /// brackets.
    pub fn try_new(tax_brackets: &'a [TaxBracket]) -> Result<Self, IncomeTaxError> {
        if tax_brackets.is_empty() {
            return Err(IncomeTaxError::NoTaxBrackets);
        }

        let last = tax_brackets.len() - 1;
        if let Some(index) = tax_brackets[..last]
            .iter()
            .position(|b| b.max_income.is_none())
        {
            return Err(IncomeTaxError::UnboundedBracket(index));
        }

        if tax_brackets[last].max_income.is_some() {
            return Err(IncomeTaxError::BoundedLastBracket(last));
        }

        if let Some(index) = tax_brackets
            .iter()
            .position(|b| b.max_income.is_some_and(|max_income| max_income <= b.min_income))
        {
            return Err(IncomeTaxError::UnorderedBrackets(index));
        }

        if let Some(index) = tax_brackets
            .windows(2)
            .position(|pair| pair[0].max_income != Some(pair[1].min_income))
        {
            return Err(IncomeTaxError::UnorderedBrackets(index + 1));
        }

        Ok(Self::build(tax_brackets))
    }

    fn build(tax_brackets: &'a [TaxBracket]) -> Self {
        let base_taxes = tax_brackets
            .iter()
            .scan(Decimal::ZERO, |running, bracket| {
                let base = *running;
                *running += bracket.tranche().unwrap_or(Decimal::ZERO);
                Some(base)
            })
            .collect();

        Self {
            tax_brackets,
            base_taxes,
        }
    }

    /// The bracket table this calculator applies.
    pub fn brackets(&self) -> &'a [TaxBracket] {
        self.tax_brackets
    }

    /// Tranche of every bracket, `None` for the open top bracket.
    pub fn tranches(&self) -> Vec<Option<Decimal>> {
        self.tax_brackets.iter().map(TaxBracket::tranche).collect()
    }

    /// Returns the tax owed for `income`.
    pub fn tax_for(
        &self,
        income: Decimal,
    ) -> Decimal {
        self.calculate(income).tax
    }

    /// Calculates tax owed for `income` along with the bracket details.
    pub fn calculate(
        &self,
        income: Decimal,
    ) -> IncomeTaxResult {
        let Some(index) = self.applicable_bracket(income) else {
            trace!(%income, "income below first threshold");
            return IncomeTaxResult {
                taxable_income: income,
                tax: Decimal::ZERO,
                bracket: None,
                base_tax: Decimal::ZERO,
                marginal_rate: Decimal::ZERO,
                effective_rate: Decimal::ZERO,
            };
        };

        let bracket = &self.tax_brackets[index];
        let base_tax = self.base_taxes[index];
        let tax = (income - bracket.min_income) * bracket.tax_rate + base_tax;

        trace!(%income, bracket = index, %base_tax, %tax, "income tax calculated");

        IncomeTaxResult {
            taxable_income: income,
            tax,
            bracket: Some(index),
            base_tax,
            marginal_rate: bracket.tax_rate,
            effective_rate: effective_rate(tax, income),
        }
    }

    /// Last bracket whose range check accepts `income`.
    fn applicable_bracket(
        &self,
        income: Decimal,
    ) -> Option<usize> {
        self.tax_brackets.iter().rposition(|b| b.contains(income))
    }
}

/// Computes resident income tax owed on `income`.
///
/// Income at or below the tax-free threshold, including negative income,
/// owes nothing.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::compute_tax;
///
/// assert_eq!(compute_tax(dec!(18200)), dec!(0));
/// assert_eq!(compute_tax(dec!(45000)), dec!(5092.00));
/// ```
pub fn compute_tax(income: Decimal) -> Decimal {
    IncomeTaxCalculator::resident().tax_for(income)
}

fn effective_rate(
    tax: Decimal,
    income: Decimal,
) -> Decimal {
    if income <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        tax / income
    }
}
