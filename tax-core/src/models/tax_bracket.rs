use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single marginal-rate bracket.
///
/// `min_income` is the threshold above which `tax_rate` applies. The open top
/// bracket has no `max_income`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
}

impl TaxBracket {
    /// Returns `true` when `income` falls inside this bracket's range check.
    ///
    /// The check is `min_income < income < max_income + 1`, so an income equal
    /// to `max_income` still belongs here. Adjacent brackets overlap for
    /// fractional incomes within one unit of a threshold; the calculator
    /// resolves that by letting the higher bracket win.
    pub fn contains(
        &self,
        income: Decimal,
    ) -> bool {
        match self.max_income {
            Some(max_income) => self.min_income < income && income < max_income + Decimal::ONE,
            None => income > self.min_income,
        }
    }

    /// Tax owed on the whole width of this bracket, `(max - min + 1) * rate`.
    ///
    /// `None` for the open top bracket.
    pub fn tranche(&self) -> Option<Decimal> {
        self.max_income
            .map(|max_income| (max_income - self.min_income + Decimal::ONE) * self.tax_rate)
    }
}
