//! Progressive slab schedules and the slab walk shared by both regimes

use super::error::TaxError;
use crate::format::format_inr_whole;
use rust_decimal::Decimal;

/// One slab of a schedule: income up to `upper_bound` (inclusive) is taxed at `rate`.
/// The lower bound is implied by the previous slab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slab {
    /// `None` for the final, open-ended slab
    pub upper_bound: Option<Decimal>,
    /// Marginal rate as a fraction, e.g. 0.05
    pub rate: Decimal,
}

impl Slab {
    pub const fn upto(upper_bound: Decimal, rate: Decimal) -> Self {
        Slab {
            upper_bound: Some(upper_bound),
            rate,
        }
    }

    pub const fn above(rate: Decimal) -> Self {
        Slab {
            upper_bound: None,
            rate,
        }
    }
}

/// Ordered slabs with strictly increasing upper bounds, ending in an unbounded slab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlabSchedule {
    slabs: Vec<Slab>,
}

impl SlabSchedule {
    pub fn new(slabs: Vec<Slab>) -> Result<Self, TaxError> {
        let Some((last, bounded)) = slabs.split_last() else {
            return Err(TaxError::InvalidConfiguration(
                "slab schedule is empty".to_string(),
            ));
        };
        if last.upper_bound.is_some() {
            return Err(TaxError::InvalidConfiguration(
                "last slab must be unbounded".to_string(),
            ));
        }

        let mut lower = Decimal::ZERO;
        for slab in bounded {
            match slab.upper_bound {
                Some(upper) if upper > lower => lower = upper,
                Some(upper) => {
                    return Err(TaxError::InvalidConfiguration(format!(
                        "slab upper bounds must be strictly increasing ({} follows {})",
                        upper, lower
                    )))
                }
                None => {
                    return Err(TaxError::InvalidConfiguration(
                        "only the last slab may be unbounded".to_string(),
                    ))
                }
            }
        }

        for slab in &slabs {
            if slab.rate.is_sign_negative() || slab.rate >= Decimal::ONE {
                return Err(TaxError::InvalidConfiguration(format!(
                    "slab rate {} outside [0, 1)",
                    slab.rate
                )));
            }
        }

        // Not enforced: a regressive schedule still computes correctly
        if slabs.windows(2).any(|w| w[1].rate < w[0].rate) {
            log::warn!("slab schedule rates are not non-decreasing: {:?}", slabs);
        }

        Ok(SlabSchedule { slabs })
    }

    pub fn slabs(&self) -> &[Slab] {
        &self.slabs
    }

    /// Slabs paired with their implied lower bound
    pub fn ranges(&self) -> impl Iterator<Item = (Decimal, &Slab)> + '_ {
        let mut lower = Decimal::ZERO;
        self.slabs().iter().map(move |slab| {
            let current = lower;
            if let Some(upper) = slab.upper_bound {
                lower = upper;
            }
            (current, slab)
        })
    }

    /// Apply the schedule to a taxable income.
    ///
    /// Every slab is visited; a slab only contributes while the income exceeds its
    /// lower bound, and only slabs with a positive contribution enter the breakdown.
    pub fn walk(&self, taxable_income: Decimal) -> SlabWalk {
        let mut tax = Decimal::ZERO;
        let mut breakdown = Vec::new();

        for (lower, slab) in self.ranges() {
            if taxable_income > lower {
                let top = match slab.upper_bound {
                    Some(upper) => upper.min(taxable_income),
                    None => taxable_income,
                };
                let contribution = (top - lower) * slab.rate;
                tax += contribution;
                log::debug!(
                    "slab {}: span {} @ {} = {}",
                    range_label(lower, slab.upper_bound),
                    top - lower,
                    slab.rate,
                    contribution
                );
                if contribution > Decimal::ZERO {
                    breakdown.push(SlabContribution::new(lower, slab, contribution));
                }
            }
        }

        SlabWalk { tax, breakdown }
    }
}

/// Tax contributed by a single slab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlabContribution {
    pub range_label: String,
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub rate_percent: Decimal,
    pub tax_amount: Decimal,
}

impl SlabContribution {
    fn new(lower: Decimal, slab: &Slab, tax_amount: Decimal) -> Self {
        SlabContribution {
            range_label: range_label(lower, slab.upper_bound),
            lower_bound: lower,
            upper_bound: slab.upper_bound,
            rate_percent: rate_percent(slab.rate),
            tax_amount,
        }
    }
}

/// Result of walking a schedule: raw tax and per-slab breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlabWalk {
    pub tax: Decimal,
    pub breakdown: Vec<SlabContribution>,
}

/// "₹2,50,000 - ₹5,00,000", or "Above ₹10,00,000" for the open-ended slab
pub fn range_label(lower: Decimal, upper: Option<Decimal>) -> String {
    match upper {
        Some(upper) => format!("{} - {}", format_inr_whole(lower), format_inr_whole(upper)),
        None => format!("Above {}", format_inr_whole(lower)),
    }
}

pub fn rate_percent(rate: Decimal) -> Decimal {
    (rate * Decimal::ONE_HUNDRED).normalize()
}
