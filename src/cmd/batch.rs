//! Batch command - compare both regimes for every request in a file

use super::print_table;
use crate::format::plain;
use crate::input::{read_requests, TaxRequest};
use crate::tax::compare;
use clap::Args;
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tabled::Tabled;

#[derive(Args, Debug)]
pub struct BatchCommand {
    /// JSON or CSV file of requests ("-" reads JSON from stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Tabled, Serialize)]
pub struct BatchRow {
    #[tabled(rename = "Id")]
    pub id: String,
    #[tabled(rename = "Year")]
    pub fiscal_year: String,
    #[tabled(rename = "Total Income")]
    pub total_income: String,
    #[tabled(rename = "Deductions")]
    pub deductions: String,
    #[tabled(rename = "Old Regime Tax")]
    pub old_tax: String,
    #[tabled(rename = "New Regime Tax")]
    pub new_tax: String,
    #[tabled(rename = "Recommended")]
    pub recommended: String,
    #[tabled(rename = "Savings")]
    pub savings: String,
}

impl BatchCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let requests = read_requests(&self.input)?;
        let rows = build_rows(&requests)?;

        if self.csv {
            let mut wtr = csv::Writer::from_writer(io::stdout());
            for row in &rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        } else if rows.is_empty() {
            println!("No requests found");
        } else {
            print_table(&rows);
        }
        Ok(())
    }
}

/// Compare every request; the first invalid request aborts with its row number
pub fn build_rows(requests: &[TaxRequest]) -> anyhow::Result<Vec<BatchRow>> {
    requests
        .iter()
        .enumerate()
        .map(|(i, request)| -> anyhow::Result<BatchRow> {
            let id = request.id.clone().unwrap_or_else(|| (i + 1).to_string());
            let comparison = request
                .total_income()
                .and_then(|income| {
                    let deductions = request.deductions().total()?;
                    compare(income, deductions, request.fiscal_year)
                })
                .map_err(|err| anyhow::anyhow!("request {}: {}", id, err))?;

            Ok(BatchRow {
                id,
                fiscal_year: comparison.fiscal_year.to_string(),
                total_income: plain(comparison.old.gross_income),
                deductions: plain(comparison.old.deductions_applied),
                old_tax: plain(comparison.old.total_tax),
                new_tax: plain(comparison.new.total_tax),
                recommended: comparison
                    .recommended
                    .map_or("Either".to_string(), |r| r.to_string()),
                savings: plain(comparison.savings),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::read_json;

    #[test]
    fn rows_per_request() {
        let json = r#"{
            "requests": [
                { "id": "a", "fiscal_year": "2024-25", "income": 1200000, "deduction_80c": 150000, "hra": 50000 },
                { "fiscal_year": "2025-26", "income": 2500000 },
                { "fiscal_year": "2024-25", "income": 200000 }
            ]
        }"#;
        let requests = read_json(json.as_bytes()).unwrap();
        let rows = build_rows(&requests).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].id, "a");
        assert_eq!(rows[0].deductions, "200000.00");
        assert_eq!(rows[0].old_tax, "112500.00");
        // New regime, taxable 11,50,000: 15,000 + 30,000 + 37,500
        assert_eq!(rows[0].new_tax, "82500.00");
        assert_eq!(rows[0].recommended, "New");
        assert_eq!(rows[0].savings, "30000.00");

        assert_eq!(rows[1].id, "2");
        assert_eq!(rows[1].new_tax, "307500.00");

        assert_eq!(rows[2].recommended, "Either");
    }

    #[test]
    fn invalid_request_names_row() {
        let json = r#"{ "requests": [ { "fiscal_year": "2024-25", "income": -5 } ] }"#;
        let requests = read_json(json.as_bytes()).unwrap();
        let err = build_rows(&requests).unwrap_err();
        assert_eq!(
            err.to_string(),
            "request 1: invalid input: income must not be negative (got -5)"
        );
    }
}
