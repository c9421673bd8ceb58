//! Export command - two-sheet statement of both regimes' breakdowns as CSV
//!
//! Each row carries its sheet name ("Old Regime" or "New Regime") so both
//! sheets fit in a single CSV document. A sheet ends with its total row.

use super::IncomeArgs;
use crate::format::plain;
use crate::tax::{compare, CalculationResult, Comparison, Regime};
use clap::Args;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ExportCommand {
    #[command(flatten)]
    income: IncomeArgs,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementRow {
    #[serde(rename = "Sheet")]
    pub sheet: &'static str,
    #[serde(rename = "Slab Range")]
    pub slab_range: String,
    #[serde(rename = "Rate (%)")]
    pub rate_percent: String,
    #[serde(rename = "Tax (₹)")]
    pub tax: String,
}

impl ExportCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let comparison = compare(
            self.income.total_income()?,
            self.income.deductions().total()?,
            self.income.fiscal_year(),
        )?;

        match self.output {
            Some(ref path) => {
                let rows = write_statement(&comparison, File::create(path)?)?;
                log::info!("Wrote {} statement rows to {}", rows, path.display());
                println!("Statement written to {}", path.display());
            }
            None => {
                write_statement(&comparison, io::stdout())?;
            }
        }
        Ok(())
    }
}

pub fn statement_rows(comparison: &Comparison) -> Vec<StatementRow> {
    [Regime::Old, Regime::New]
        .into_iter()
        .flat_map(|regime| sheet_rows(comparison.result(regime)))
        .collect()
}

fn sheet_rows(result: &CalculationResult) -> Vec<StatementRow> {
    let sheet = result.regime.sheet_name();
    let mut rows: Vec<_> = result
        .breakdown
        .iter()
        .map(|c| StatementRow {
            sheet,
            slab_range: c.range_label.clone(),
            rate_percent: c.rate_percent.to_string(),
            tax: plain(c.tax_amount),
        })
        .collect();

    if !result.rebate.is_zero() {
        rows.push(StatementRow {
            sheet,
            slab_range: "Rebate".to_string(),
            rate_percent: String::new(),
            tax: plain(-result.rebate),
        });
    }
    rows.push(StatementRow {
        sheet,
        slab_range: "Total".to_string(),
        rate_percent: String::new(),
        tax: plain(result.total_tax),
    });
    rows
}

/// Write the statement as CSV, returning the number of rows written
pub fn write_statement<W: Write>(comparison: &Comparison, writer: W) -> anyhow::Result<usize> {
    let rows = statement_rows(comparison);
    let mut wtr = csv::Writer::from_writer(writer);
    for row in &rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::FiscalYear;
    use rust_decimal_macros::dec;

    #[test]
    fn statement_has_both_sheets() {
        let comparison = compare(dec!(2500000), dec!(0), FiscalYear::Fy2025_26).unwrap();
        let rows = statement_rows(&comparison);

        let old: Vec<_> = rows.iter().filter(|r| r.sheet == "Old Regime").collect();
        let new: Vec<_> = rows.iter().filter(|r| r.sheet == "New Regime").collect();
        // 3 taxed slabs + total
        assert_eq!(old.len(), 4);
        // 6 taxed slabs + total
        assert_eq!(new.len(), 7);
        assert_eq!(old.last().unwrap().tax, "562500.00");
        assert_eq!(new.last().unwrap().slab_range, "Total");
        assert_eq!(new.last().unwrap().tax, "307500.00");
        assert_eq!(new[5].slab_range, "Above ₹24,00,000");
        assert_eq!(new[5].rate_percent, "30");
    }

    #[test]
    fn rebate_row_included() {
        let comparison = compare(dec!(750000), dec!(0), FiscalYear::Fy2024_25).unwrap();
        let rows = statement_rows(&comparison);
        let new: Vec<_> = rows.iter().filter(|r| r.sheet == "New Regime").collect();
        let labels: Vec<_> = new.iter().map(|r| r.slab_range.as_str()).collect();
        assert_eq!(
            labels,
            vec!["₹3,00,000 - ₹6,00,000", "₹6,00,000 - ₹9,00,000", "Rebate", "Total"]
        );
        assert_eq!(new[2].tax, "-25000.00");
        assert_eq!(new[3].tax, "0.00");
    }

    #[test]
    fn csv_header_and_rows() {
        let comparison = compare(dec!(200000), dec!(0), FiscalYear::Fy2024_25).unwrap();
        let mut buf = Vec::new();
        let count = write_statement(&comparison, &mut buf).unwrap();
        assert_eq!(count, 2);
        let csv = String::from_utf8(buf).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Sheet,Slab Range,Rate (%),Tax (₹)"));
        assert_eq!(lines.next(), Some("Old Regime,Total,,0.00"));
        assert_eq!(lines.next(), Some("New Regime,Total,,0.00"));
        assert_eq!(lines.next(), None);
    }
}
