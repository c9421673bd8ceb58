//! Compare command - old vs. new regime on the same income

use super::{breakdown_rows, print_table, IncomeArgs, ResultSummary};
use crate::format::{format_inr, plain};
use crate::tax::{compare, Comparison, Regime};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

#[derive(Args, Debug)]
pub struct CompareCommand {
    #[command(flatten)]
    income: IncomeArgs,

    /// Also print the per-slab breakdown of both regimes
    #[arg(short, long)]
    breakdown: bool,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Regime")]
    regime: String,
    #[tabled(rename = "Tax Amount (₹)")]
    tax: String,
}

#[derive(Debug, Serialize)]
struct ComparisonJson {
    fiscal_year: String,
    total_income: String,
    old: ResultSummary,
    new: ResultSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    recommended: Option<String>,
    savings: String,
}

impl CompareCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let comparison = compare(
            self.income.total_income()?,
            self.income.deductions().total()?,
            self.income.fiscal_year(),
        )?;

        if self.json {
            let data = ComparisonJson {
                fiscal_year: comparison.fiscal_year.to_string(),
                total_income: plain(comparison.old.gross_income),
                old: ResultSummary::from(&comparison.old),
                new: ResultSummary::from(&comparison.new),
                recommended: comparison.recommended.map(|r| r.to_string()),
                savings: plain(comparison.savings),
            };
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else {
            self.print_comparison(&comparison);
        }
        Ok(())
    }

    fn print_comparison(&self, comparison: &Comparison) {
        println!();
        println!("TAX CALCULATION SUMMARY (FY {})", comparison.fiscal_year);
        println!();
        println!(
            "  Total Income (Including GST): {}",
            format_inr(comparison.old.gross_income)
        );
        println!(
            "  Tax under Old Regime: {}",
            format_inr(comparison.old.total_tax)
        );
        println!(
            "  Tax under New Regime: {}",
            format_inr(comparison.new.total_tax)
        );
        println!();
        println!("{}", comparison.verdict());
        println!();

        let rows: Vec<_> = [Regime::Old, Regime::New]
            .into_iter()
            .map(|regime| ComparisonRow {
                regime: regime.to_string(),
                tax: plain(comparison.result(regime).total_tax),
            })
            .collect();
        println!("Comparison Table: Old vs. New Regime");
        print_table(&rows);

        if self.breakdown {
            for regime in [Regime::Old, Regime::New] {
                let rows = breakdown_rows(comparison.result(regime));
                println!();
                println!("{}", regime.sheet_name());
                if rows.is_empty() {
                    println!("No slab above the nil rate applies");
                } else {
                    print_table(&rows);
                }
            }
        }
        println!();
    }
}
