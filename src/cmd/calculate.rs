//! Calculate command - tax under a single regime with per-slab breakdown

use super::{breakdown_rows, print_table, IncomeArgs, RegimeArg, ResultSummary};
use crate::format::format_inr;
use crate::tax::{calculate, CalculationInput, CalculationResult, Regime};
use clap::Args;

#[derive(Args, Debug)]
pub struct CalculateCommand {
    #[command(flatten)]
    income: IncomeArgs,

    /// Tax regime
    #[arg(short, long, value_enum, default_value_t = RegimeArg::New)]
    regime: RegimeArg,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl CalculateCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = CalculationInput {
            gross_income: self.income.total_income()?,
            deductions: self.income.deductions().total()?,
            fiscal_year: self.income.fiscal_year(),
            regime: self.regime.into(),
        };
        let result = calculate(&input)?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&ResultSummary::from(&result))?
            );
        } else {
            print_result(&result);
        }
        Ok(())
    }
}

pub fn print_result(result: &CalculationResult) {
    println!();
    println!(
        "INCOME TAX (FY {}, {} Regime)",
        result.fiscal_year, result.regime
    );
    println!();
    println!(
        "  Total Income (Including GST): {}",
        format_inr(result.gross_income)
    );
    match result.regime {
        Regime::Old => println!("  Deductions: {}", format_inr(result.deductions_applied)),
        Regime::New => println!(
            "  Standard Deduction: {}",
            format_inr(result.deductions_applied)
        ),
    }
    println!("  Taxable Income: {}", format_inr(result.taxable_income));
    if !result.rebate.is_zero() {
        println!(
            "  Tax before rebate: {} | Rebate: {}",
            format_inr(result.tax_before_rebate),
            format_inr(result.rebate)
        );
    }
    println!();

    let rows = breakdown_rows(result);
    if rows.is_empty() {
        println!("No slab above the nil rate applies");
    } else {
        print_table(&rows);
    }
    println!();
    println!("TOTAL TAX: {}", format_inr(result.total_tax));
    println!();
}
