use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tax_cli::cli::{Cli, OutputFormat};
use tax_cli::{logging, report};
use tax_core::IncomeTaxCalculator;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.log_level.as_deref())?;

    let calculator = IncomeTaxCalculator::resident();

    if cli.show_brackets {
        print!("{}", report::render_brackets(&calculator));
        if cli.has_no_input() {
            return Ok(());
        }
        println!();
    }

    let records = cli.records()?;

    debug!(count = records.len(), format = ?cli.format, "calculating tax");
    let rows = report::build_rows(&calculator, &records);

    match cli.format {
        OutputFormat::Table => print!("{}", report::render_table(&rows)),
        OutputFormat::Csv => report::write_csv(&rows, io::stdout().lock())
            .context("Failed to write CSV report")?,
    }

    Ok(())
}
