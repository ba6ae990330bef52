//! Command-line definition for `tax-calc`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use tracing::info;

use crate::income_loader::{self, IncomeRecord};

/// Progressive income tax calculator.
///
/// Calculates resident income tax for each income given on the command line
/// or in a CSV file with a `taxable_income` column.
#[derive(Debug, Parser)]
#[command(name = "tax-calc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Taxable incomes, e.g. `45000` or `120001.50`.
    #[arg(value_name = "INCOME", allow_negative_numbers = true)]
    pub incomes: Vec<Decimal>,

    /// CSV file with `taxable_income` and optional `label` columns.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Print the bracket table and its tranches.
    #[arg(long)]
    pub show_brackets: bool,

    /// Log filter (overrides `RUST_LOG`), e.g. `debug` or `tax_core=trace`.
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
}

impl Cli {
    /// Returns `true` when no incomes were given, either inline or by file.
    pub fn has_no_input(&self) -> bool {
        self.incomes.is_empty() && self.file.is_none()
    }

    /// Positional incomes first, then the rows of `--file` in file order.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be loaded or when there is nothing to
    /// calculate.
    pub fn records(&self) -> Result<Vec<IncomeRecord>> {
        let mut records: Vec<IncomeRecord> =
            self.incomes.iter().copied().map(IncomeRecord::new).collect();

        if let Some(path) = &self.file {
            let loaded = income_loader::load_from_file(path)
                .with_context(|| format!("Failed to load incomes from: {}", path.display()))?;
            info!(rows = loaded.len(), path = %path.display(), "loaded incomes");
            records.extend(loaded);
        }

        if records.is_empty() {
            anyhow::bail!("No incomes given. Pass one or more incomes or use --file.");
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    const FIXTURE: &str = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/sample_incomes.csv"
    );

    // -----------------------------------------------------------------------
    // Argument parsing
    // -----------------------------------------------------------------------

    #[test]
    fn test_defaults_to_table_format() {
        let cli = Cli::try_parse_from(["tax-calc", "45000"]).unwrap();

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(!cli.show_brackets);
        assert_eq!(cli.log_level, None);
    }

    #[test]
    fn test_parses_decimal_and_negative_incomes() {
        let cli = Cli::try_parse_from(["tax-calc", "45000", "120001.50", "-10"]).unwrap();

        assert_eq!(cli.incomes, vec![dec!(45000), dec!(120001.50), dec!(-10)]);
    }

    #[test]
    fn test_non_numeric_income_is_rejected() {
        let result = Cli::try_parse_from(["tax-calc", "lots"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_csv_format_flag() {
        let cli = Cli::try_parse_from(["tax-calc", "--format", "csv", "1"]).unwrap();

        assert_eq!(cli.format, OutputFormat::Csv);
    }

    // -----------------------------------------------------------------------
    // records
    // -----------------------------------------------------------------------

    #[test]
    fn test_no_incomes_and_no_file_fails() {
        let cli = Cli::try_parse_from(["tax-calc"]).unwrap();

        assert!(cli.has_no_input());
        let err = cli.records().unwrap_err();
        assert!(err.to_string().contains("No incomes given"), "got {err}");
    }

    #[test]
    fn test_show_brackets_alone_has_no_input() {
        let cli = Cli::try_parse_from(["tax-calc", "--show-brackets"]).unwrap();

        assert!(cli.show_brackets);
        assert!(cli.has_no_input());
    }

    #[test]
    fn test_file_rows_follow_positional_incomes() {
        let cli = Cli::try_parse_from(["tax-calc", "1000", "2000", "--file", FIXTURE]).unwrap();

        let records = cli.records().unwrap();

        assert_eq!(records.len(), 2 + 4);
        assert_eq!(records[0], IncomeRecord::new(dec!(1000)));
        assert_eq!(records[1], IncomeRecord::new(dec!(2000)));
        assert_eq!(records[2].label.as_deref(), Some("student"));
        assert_eq!(records[5].label.as_deref(), Some("executive"));
    }

    #[test]
    fn test_missing_file_fails_with_path_context() {
        let cli = Cli::try_parse_from(["tax-calc", "--file", "does/not/exist.csv"]).unwrap();

        let err = cli.records().unwrap_err();

        assert!(
            err.to_string().contains("does/not/exist.csv"),
            "got {err}"
        );
    }
}
