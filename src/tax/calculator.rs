use super::error::{ensure_non_negative, TaxError};
use super::regime::RegimeConfig;
use super::slab::SlabContribution;
use super::year::{FiscalYear, Regime};
use rust_decimal::Decimal;

/// A single calculation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationInput {
    pub gross_income: Decimal,
    /// Only honoured by the old regime
    pub deductions: Decimal,
    pub fiscal_year: FiscalYear,
    pub regime: Regime,
}

/// Tax computed under one regime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationResult {
    pub regime: Regime,
    pub fiscal_year: FiscalYear,
    pub gross_income: Decimal,
    /// Deductions (old regime) or standard deduction (new regime) subtracted from income
    pub deductions_applied: Decimal,
    pub taxable_income: Decimal,
    /// Sum of the breakdown
    pub tax_before_rebate: Decimal,
    /// Rebate actually granted, never more than the tax before rebate
    pub rebate: Decimal,
    pub total_tax: Decimal,
    pub breakdown: Vec<SlabContribution>,
}

/// Tax under the old regime: income less deductions, no rebate
pub fn compute_old_regime_tax(
    gross_income: Decimal,
    deductions: Decimal,
    fiscal_year: FiscalYear,
) -> Result<CalculationResult, TaxError> {
    let gross_income = ensure_non_negative("income", gross_income)?;
    let deductions = ensure_non_negative("deductions", deductions)?;
    let config = RegimeConfig::old_regime(fiscal_year)?;
    Ok(apply(&config, gross_income, deductions))
}

/// Tax under the new regime: income less the standard deduction, rebate below the threshold
pub fn compute_new_regime_tax(
    gross_income: Decimal,
    fiscal_year: FiscalYear,
) -> Result<CalculationResult, TaxError> {
    let gross_income = ensure_non_negative("income", gross_income)?;
    let config = RegimeConfig::new_regime(fiscal_year)?;
    Ok(apply(&config, gross_income, config.standard_deduction))
}

/// Dispatch a request to the calculator for its regime
pub fn calculate(input: &CalculationInput) -> Result<CalculationResult, TaxError> {
    match input.regime {
        Regime::Old => compute_old_regime_tax(input.gross_income, input.deductions, input.fiscal_year),
        Regime::New => {
            ensure_non_negative("deductions", input.deductions)?;
            if !input.deductions.is_zero() {
                log::warn!(
                    "deductions of {} ignored: the new regime only allows the standard deduction",
                    input.deductions
                );
            }
            compute_new_regime_tax(input.gross_income, input.fiscal_year)
        }
    }
}

fn apply(config: &RegimeConfig, gross_income: Decimal, deductions: Decimal) -> CalculationResult {
    let taxable_income = (gross_income - deductions).max(Decimal::ZERO);
    let walk = config.schedule.walk(taxable_income);

    let rebate = match config.rebate {
        Some(rebate) if rebate.applies_to(taxable_income) => {
            log::debug!(
                "taxable income {} within rebate threshold {}, rebate up to {}",
                taxable_income,
                rebate.threshold,
                rebate.amount
            );
            rebate.amount.min(walk.tax)
        }
        _ => Decimal::ZERO,
    };

    CalculationResult {
        regime: config.regime,
        fiscal_year: config.fiscal_year,
        gross_income,
        deductions_applied: deductions,
        taxable_income,
        tax_before_rebate: walk.tax,
        rebate,
        total_tax: walk.tax - rebate,
        breakdown: walk.breakdown,
    }
}
