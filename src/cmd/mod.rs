pub mod batch;
pub mod calculate;
pub mod compare;
pub mod export;
pub mod schema;
pub mod slabs;

use crate::format::plain;
use crate::input::{total_income, Deductions};
use crate::tax::{CalculationResult, FiscalYear, Regime, TaxError};
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

/// Income, year and deduction flags shared by the single-person commands
#[derive(Args, Debug)]
pub struct IncomeArgs {
    /// Annual income in rupees
    #[arg(short, long, allow_negative_numbers = true)]
    income: Decimal,

    /// Financial year (2024-25 or 2025-26)
    #[arg(short, long, default_value = "2025-26")]
    year: FiscalYear,

    /// GST amount, added to income
    #[arg(long, allow_negative_numbers = true)]
    gst: Option<Decimal>,

    /// 80C deduction: PPF, EPF, LIC, etc. (old regime only)
    #[arg(long, allow_negative_numbers = true)]
    deduction_80c: Option<Decimal>,

    /// 80D deduction: health insurance premium (old regime only)
    #[arg(long, allow_negative_numbers = true)]
    deduction_80d: Option<Decimal>,

    /// Home loan interest (old regime only)
    #[arg(long, allow_negative_numbers = true)]
    home_loan_interest: Option<Decimal>,

    /// House Rent Allowance (old regime only)
    #[arg(long, allow_negative_numbers = true)]
    hra: Option<Decimal>,
}

impl IncomeArgs {
    pub fn fiscal_year(&self) -> FiscalYear {
        self.year
    }

    /// Income including GST
    pub fn total_income(&self) -> Result<Decimal, TaxError> {
        total_income(self.income, self.gst.unwrap_or_default())
    }

    pub fn deductions(&self) -> Deductions {
        Deductions {
            section_80c: self.deduction_80c.unwrap_or_default(),
            section_80d: self.deduction_80d.unwrap_or_default(),
            home_loan_interest: self.home_loan_interest.unwrap_or_default(),
            hra: self.hra.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RegimeArg {
    Old,
    New,
}

impl From<RegimeArg> for Regime {
    fn from(arg: RegimeArg) -> Self {
        match arg {
            RegimeArg::Old => Regime::Old,
            RegimeArg::New => Regime::New,
        }
    }
}

/// Row of a per-slab breakdown table
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct BreakdownRow {
    #[tabled(rename = "Slab Range")]
    #[serde(rename = "Slab Range")]
    pub slab_range: String,

    #[tabled(rename = "Rate (%)")]
    #[serde(rename = "Rate (%)")]
    pub rate_percent: String,

    #[tabled(rename = "Tax (₹)")]
    #[serde(rename = "Tax (₹)")]
    pub tax: String,
}

pub fn breakdown_rows(result: &CalculationResult) -> Vec<BreakdownRow> {
    result
        .breakdown
        .iter()
        .map(|c| BreakdownRow {
            slab_range: c.range_label.clone(),
            rate_percent: c.rate_percent.to_string(),
            tax: plain(c.tax_amount),
        })
        .collect()
}

pub fn print_table<T: Tabled>(rows: &[T]) {
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}

/// Amounts of a calculation, formatted for JSON output
#[derive(Debug, Serialize)]
pub struct ResultSummary {
    regime: String,
    fiscal_year: String,
    gross_income: String,
    deductions_applied: String,
    taxable_income: String,
    tax_before_rebate: String,
    rebate: String,
    total_tax: String,
    breakdown: Vec<BreakdownRow>,
}

impl From<&CalculationResult> for ResultSummary {
    fn from(result: &CalculationResult) -> Self {
        ResultSummary {
            regime: result.regime.to_string(),
            fiscal_year: result.fiscal_year.to_string(),
            gross_income: plain(result.gross_income),
            deductions_applied: plain(result.deductions_applied),
            taxable_income: plain(result.taxable_income),
            tax_before_rebate: plain(result.tax_before_rebate),
            rebate: plain(result.rebate),
            total_tax: plain(result.total_tax),
            breakdown: breakdown_rows(result),
        }
    }
}
