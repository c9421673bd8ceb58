use super::error::TaxError;
use super::slab::{Slab, SlabSchedule};
use super::year::{FiscalYear, Regime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Old regime slabs, unchanged between FY 2024-25 and 2025-26
const OLD_REGIME_SLABS: &[Slab] = &[
    Slab::upto(dec!(250000), dec!(0)),
    Slab::upto(dec!(500000), dec!(0.05)),
    Slab::upto(dec!(1000000), dec!(0.20)),
    Slab::above(dec!(0.30)),
];

const NEW_REGIME_SLABS_2024_25: &[Slab] = &[
    Slab::upto(dec!(300000), dec!(0)),
    Slab::upto(dec!(600000), dec!(0.05)),
    Slab::upto(dec!(900000), dec!(0.10)),
    Slab::upto(dec!(1200000), dec!(0.15)),
    Slab::upto(dec!(1500000), dec!(0.20)),
    Slab::above(dec!(0.30)),
];

const NEW_REGIME_SLABS_2025_26: &[Slab] = &[
    Slab::upto(dec!(400000), dec!(0)),
    Slab::upto(dec!(800000), dec!(0.05)),
    Slab::upto(dec!(1200000), dec!(0.10)),
    Slab::upto(dec!(1600000), dec!(0.15)),
    Slab::upto(dec!(2000000), dec!(0.20)),
    Slab::upto(dec!(2400000), dec!(0.25)),
    Slab::above(dec!(0.30)),
];

/// Tax credit granted when taxable income does not exceed `threshold`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rebate {
    pub threshold: Decimal,
    pub amount: Decimal,
}

impl Rebate {
    pub fn applies_to(&self, taxable_income: Decimal) -> bool {
        taxable_income <= self.threshold
    }
}

/// Everything needed to compute tax under one regime for one financial year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegimeConfig {
    pub regime: Regime,
    pub fiscal_year: FiscalYear,
    pub schedule: SlabSchedule,
    pub standard_deduction: Decimal,
    pub rebate: Option<Rebate>,
}

impl RegimeConfig {
    pub fn for_year(regime: Regime, fiscal_year: FiscalYear) -> Result<Self, TaxError> {
        match regime {
            Regime::Old => Self::old_regime(fiscal_year),
            Regime::New => Self::new_regime(fiscal_year),
        }
    }

    /// The old regime has no standard deduction or rebate here; both years share one schedule
    pub fn old_regime(fiscal_year: FiscalYear) -> Result<Self, TaxError> {
        let slabs = match fiscal_year {
            FiscalYear::Fy2024_25 | FiscalYear::Fy2025_26 => OLD_REGIME_SLABS,
        };
        Ok(RegimeConfig {
            regime: Regime::Old,
            fiscal_year,
            schedule: SlabSchedule::new(slabs.to_vec())?,
            standard_deduction: Decimal::ZERO,
            rebate: None,
        })
    }

    pub fn new_regime(fiscal_year: FiscalYear) -> Result<Self, TaxError> {
        let (slabs, standard_deduction, rebate) = match fiscal_year {
            FiscalYear::Fy2024_25 => (
                NEW_REGIME_SLABS_2024_25,
                dec!(50000),
                Rebate {
                    threshold: dec!(700000),
                    amount: dec!(25000),
                },
            ),
            FiscalYear::Fy2025_26 => (
                NEW_REGIME_SLABS_2025_26,
                dec!(75000),
                Rebate {
                    threshold: dec!(1200000),
                    amount: dec!(60000),
                },
            ),
        };
        Ok(RegimeConfig {
            regime: Regime::New,
            fiscal_year,
            schedule: SlabSchedule::new(slabs.to_vec())?,
            standard_deduction,
            rebate: Some(rebate),
        })
    }
}
