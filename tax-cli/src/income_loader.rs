//! CSV loader for taxable incomes.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name). Header
//! names are case-sensitive.
//!
//! | Column | Required | Type | Notes |
//! |------------------|----------|---------|-------------------------------|
//! | `label` | no | string | Leave cell empty for `None` |
//! | `taxable_income` | yes | decimal | e.g. `75000.00` |
//!
//! ### Example
//!
//! ```csv
//! label,taxable_income
//! graduate,45000
//! ,120001.50
//! ```
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

/// A single income to calculate tax for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IncomeRecord {
    #[serde(default, deserialize_with = "deserialize_optional_label")]
    pub label: Option<String>,
    pub taxable_income: Decimal,
}

impl IncomeRecord {
    pub fn new(taxable_income: Decimal) -> Self {
        Self {
            label: None,
            taxable_income,
        }
    }
}

fn deserialize_optional_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Errors that can occur while loading incomes.
#[derive(Debug, thiserror::Error)]
pub enum IncomeLoadError {
    /// The file could not be read.
    #[error("cannot read income file: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV is structurally invalid, lacks the `taxable_income` column, or
    /// holds a value that is not a decimal number.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// The CSV has a header but no data rows.
    #[error("no income rows found")]
    Empty,
}

/// Parse CSV text and return the incomes in file order.
///
/// # Errors
///
/// * [IncomeLoadError::Parse] if a row cannot be deserialised.
/// * [IncomeLoadError::Empty] if there are no data rows.
pub fn load_from_str(input: &str) -> Result<Vec<IncomeRecord>, IncomeLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let records = reader
        .deserialize::<IncomeRecord>()
        .collect::<Result<Vec<_>, _>>()?;

    if records.is_empty() {
        return Err(IncomeLoadError::Empty);
    }

    debug!(rows = records.len(), "parsed income rows");
    Ok(records)
}

/// Read a file from disk and delegate to [load_from_str].
pub fn load_from_file(path: &Path) -> Result<Vec<IncomeRecord>, IncomeLoadError> {
    debug!(path = %path.display(), "loading incomes");
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}
