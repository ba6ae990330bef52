//! Integration tests that run the loader and report against an on-disk
//! fixture file.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tax_cli::{income_loader, report};
use tax_core::IncomeTaxCalculator;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_incomes.csv")
}

#[test]
fn test_load_fixture_file_succeeds() {
    let records = income_loader::load_from_file(&fixture_path())
        .expect("fixture file should load without error");

    // The fixture has exactly 4 rows.
    assert_eq!(records.len(), 4);
}

#[test]
fn test_load_fixture_trims_and_parses_values() {
    let records = income_loader::load_from_file(&fixture_path()).unwrap();

    assert_eq!(records[0].label.as_deref(), Some("student"));
    assert_eq!(records[0].taxable_income, dec!(12000.00));
    assert_eq!(records[3].label.as_deref(), Some("executive"));
    assert_eq!(records[3].taxable_income, dec!(250000.50));
}

#[test]
fn test_fixture_report_taxes() {
    let records = income_loader::load_from_file(&fixture_path()).unwrap();
    let calculator = IncomeTaxCalculator::resident();

    let taxes: Vec<_> = report::build_rows(&calculator, &records)
        .into_iter()
        .map(|row| row.tax)
        .collect();

    assert_eq!(
        taxes,
        vec![
            dec!(0),
            dec!(5092.00),
            dec!(29467.885),
            // 70000.50 * 0.45 + 51667.885
            dec!(83168.11),
        ]
    );
}

#[test]
fn test_fixture_csv_report_has_row_per_income() {
    let records = income_loader::load_from_file(&fixture_path()).unwrap();
    let calculator = IncomeTaxCalculator::resident();
    let rows = report::build_rows(&calculator, &records);
    let mut buf = Vec::new();

    report::write_csv(&rows, &mut buf).unwrap();

    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().count(), 1 + records.len());
    assert!(text.contains("manager,120001,29467.885,0.37,"), "got {text}");
}
