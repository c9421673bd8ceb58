//! Slabs command - show the schedule, standard deduction and rebate of a regime

use super::{print_table, RegimeArg};
use crate::format::format_inr;
use crate::tax::slab::{range_label, rate_percent};
use crate::tax::{FiscalYear, Regime, RegimeConfig};
use chrono::NaiveDate;
use clap::Args;
use tabled::Tabled;

#[derive(Args, Debug)]
pub struct SlabsCommand {
    /// Financial year (2024-25 or 2025-26)
    #[arg(short, long, default_value = "2025-26")]
    year: FiscalYear,

    /// Pick the financial year containing this date instead (YYYY-MM-DD)
    #[arg(short, long, conflicts_with = "year")]
    date: Option<NaiveDate>,

    /// Tax regime
    #[arg(short, long, value_enum, default_value_t = RegimeArg::New)]
    regime: RegimeArg,
}

#[derive(Debug, Tabled)]
pub struct SlabRow {
    #[tabled(rename = "Slab Range")]
    pub slab_range: String,
    #[tabled(rename = "Rate (%)")]
    pub rate_percent: String,
}

impl SlabsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let regime: Regime = self.regime.into();
        let year = match self.date {
            Some(date) => FiscalYear::from_date(date)?,
            None => self.year,
        };
        let config = RegimeConfig::for_year(regime, year)?;

        println!();
        println!(
            "{} ({} to {}, AY {})",
            regime.sheet_name().to_uppercase(),
            config.fiscal_year.start_date().format("%d %b %Y"),
            config.fiscal_year.end_date().format("%d %b %Y"),
            config.fiscal_year.assessment_year()
        );
        println!();
        print_table(&slab_rows(&config));
        println!();
        println!(
            "  Standard Deduction: {}",
            format_inr(config.standard_deduction)
        );
        match config.rebate {
            Some(rebate) => println!(
                "  Rebate: up to {} when taxable income is at most {}",
                format_inr(rebate.amount),
                format_inr(rebate.threshold)
            ),
            None => println!("  Rebate: none"),
        }
        println!();
        Ok(())
    }
}

pub fn slab_rows(config: &RegimeConfig) -> Vec<SlabRow> {
    config
        .schedule
        .ranges()
        .map(|(lower, slab)| SlabRow {
            slab_range: range_label(lower, slab.upper_bound),
            rate_percent: rate_percent(slab.rate).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn old_regime_rows() {
        let config = RegimeConfig::for_year(Regime::Old, FiscalYear::Fy2024_25).unwrap();
        let rows = slab_rows(&config);
        let labels: Vec<_> = rows.iter().map(|r| r.slab_range.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "₹0 - ₹2,50,000",
                "₹2,50,000 - ₹5,00,000",
                "₹5,00,000 - ₹10,00,000",
                "Above ₹10,00,000"
            ]
        );
        let rates: Vec<_> = rows.iter().map(|r| r.rate_percent.as_str()).collect();
        assert_eq!(rates, vec!["0", "5", "20", "30"]);
    }

    #[test]
    fn new_regime_2025_26_rows() {
        let config = RegimeConfig::for_year(Regime::New, FiscalYear::Fy2025_26).unwrap();
        let rows = slab_rows(&config);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[5].slab_range, "₹20,00,000 - ₹24,00,000");
        assert_eq!(rows[5].rate_percent, "25");
    }
}
