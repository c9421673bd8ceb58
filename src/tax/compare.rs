use super::calculator::{compute_new_regime_tax, compute_old_regime_tax, CalculationResult};
use super::error::TaxError;
use super::year::{FiscalYear, Regime};
use crate::format::format_inr;
use rust_decimal::Decimal;

/// Both regimes computed on the same income
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub fiscal_year: FiscalYear,
    pub old: CalculationResult,
    pub new: CalculationResult,
    /// Regime with the lower tax, `None` when both are equal
    pub recommended: Option<Regime>,
    pub savings: Decimal,
}

impl Comparison {
    pub fn result(&self, regime: Regime) -> &CalculationResult {
        match regime {
            Regime::Old => &self.old,
            Regime::New => &self.new,
        }
    }

    pub fn verdict(&self) -> String {
        match self.recommended {
            Some(regime) => format!(
                "{} Regime is more beneficial! You save {}.",
                regime,
                format_inr(self.savings)
            ),
            None => "Both regimes yield the same tax amount.".to_string(),
        }
    }
}

/// Compute tax under both regimes. Deductions only reduce the old regime's taxable income.
pub fn compare(
    gross_income: Decimal,
    deductions: Decimal,
    fiscal_year: FiscalYear,
) -> Result<Comparison, TaxError> {
    let old = compute_old_regime_tax(gross_income, deductions, fiscal_year)?;
    let new = compute_new_regime_tax(gross_income, fiscal_year)?;

    let recommended = match old.total_tax.cmp(&new.total_tax) {
        std::cmp::Ordering::Less => Some(Regime::Old),
        std::cmp::Ordering::Greater => Some(Regime::New),
        std::cmp::Ordering::Equal => None,
    };
    let savings = (old.total_tax - new.total_tax).abs();

    Ok(Comparison {
        fiscal_year,
        old,
        new,
        recommended,
        savings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn new_regime_better_without_deductions() {
        let cmp = compare(dec!(2500000), dec!(0), FiscalYear::Fy2025_26).unwrap();
        // Old: 12,500 + 1,00,000 + 15,00,000 @ 30% = 5,62,500
        assert_eq!(cmp.old.total_tax, dec!(562500));
        assert_eq!(cmp.new.total_tax, dec!(307500));
        assert_eq!(cmp.recommended, Some(Regime::New));
        assert_eq!(cmp.savings, dec!(255000));
        assert_eq!(
            cmp.verdict(),
            "New Regime is more beneficial! You save ₹2,55,000.00."
        );
    }

    #[test]
    fn old_regime_better_with_large_deductions() {
        // Old taxable 5,00,000 -> 12,500; new taxable 11,50,000 -> 82,500
        let cmp = compare(dec!(1200000), dec!(700000), FiscalYear::Fy2024_25).unwrap();
        assert_eq!(cmp.old.total_tax, dec!(12500));
        assert_eq!(cmp.new.total_tax, dec!(82500));
        assert_eq!(cmp.recommended, Some(Regime::Old));
        assert_eq!(cmp.savings, dec!(70000));
        assert_eq!(cmp.result(Regime::Old), &cmp.old);
    }

    #[test]
    fn tie_has_no_recommendation() {
        let cmp = compare(dec!(200000), dec!(0), FiscalYear::Fy2024_25).unwrap();
        assert_eq!(cmp.old.total_tax, dec!(0));
        assert_eq!(cmp.new.total_tax, dec!(0));
        assert_eq!(cmp.recommended, None);
        assert_eq!(cmp.savings, dec!(0));
        assert_eq!(cmp.verdict(), "Both regimes yield the same tax amount.");
    }

    #[test]
    fn deductions_do_not_affect_new_regime() {
        let a = compare(dec!(1800000), dec!(0), FiscalYear::Fy2025_26).unwrap();
        let b = compare(dec!(1800000), dec!(250000), FiscalYear::Fy2025_26).unwrap();
        assert_eq!(a.new, b.new);
        assert!(b.old.total_tax < a.old.total_tax);
    }

    #[test]
    fn invalid_input_propagates() {
        assert!(matches!(
            compare(dec!(-10), dec!(0), FiscalYear::Fy2025_26),
            Err(TaxError::InvalidInput { .. })
        ));
    }
}
