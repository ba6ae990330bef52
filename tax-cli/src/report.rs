//! Tabular reports of calculated income tax.

use std::io;

use rust_decimal::Decimal;
use serde::Serialize;
use tax_core::IncomeTaxCalculator;
use tax_core::calculations::common::{as_percentage, round_half_up};

use crate::income_loader::IncomeRecord;

/// One line of a tax report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub label: Option<String>,
    pub taxable_income: Decimal,
    pub tax: Decimal,
    pub marginal_rate: Decimal,
    pub effective_rate: Decimal,
}

/// Runs every record through the calculator, preserving order.
pub fn build_rows(
    calculator: &IncomeTaxCalculator<'_>,
    records: &[IncomeRecord],
) -> Vec<ReportRow> {
    records
        .iter()
        .map(|record| {
            let result = calculator.calculate(record.taxable_income);
            ReportRow {
                label: record.label.clone(),
                taxable_income: result.taxable_income,
                tax: result.tax,
                marginal_rate: result.marginal_rate,
                effective_rate: result.effective_rate,
            }
        })
        .collect()
}

/// Writes rows as CSV with a header line. Values are written unrounded.
pub fn write_csv<W: io::Write>(
    rows: &[ReportRow],
    writer: W,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Renders rows as an aligned text table with money rounded to cents.
pub fn render_table(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<16} {:>16} {:>14} {:>9} {:>10}\n",
        "Label", "Taxable income", "Tax", "Marginal", "Effective"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<16} {:>16} {:>14} {:>8}% {:>9}%\n",
            row.label.as_deref().unwrap_or("-"),
            format!("{:.2}", round_half_up(row.taxable_income)),
            format!("{:.2}", round_half_up(row.tax)),
            format!("{:.2}", as_percentage(row.marginal_rate)),
            format!("{:.2}", as_percentage(row.effective_rate)),
        ));
    }
    out
}

/// Renders the calculator's bracket table with each bracket's tranche.
pub fn render_brackets(calculator: &IncomeTaxCalculator<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>12} {:>12} {:>8} {:>14}\n",
        "Over", "Up to", "Rate", "Tranche"
    ));
    for (bracket, tranche) in calculator.brackets().iter().zip(calculator.tranches()) {
        out.push_str(&format!(
            "{:>12} {:>12} {:>7}% {:>14}\n",
            bracket.min_income,
            bracket
                .max_income
                .map_or_else(|| "-".to_string(), |max| max.to_string()),
            format!("{:.2}", as_percentage(bracket.tax_rate)),
            tranche.map_or_else(|| "-".to_string(), |t| t.to_string()),
        ));
    }
    out
}
