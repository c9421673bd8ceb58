//! Rupee formatting with Indian digit grouping (12,34,567.00)

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to paise, half away from zero
pub fn round_paise(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as rupees, two decimal places, lakh/crore grouping
pub fn format_inr(amount: Decimal) -> String {
    let amount = round_paise(amount);
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}₹{}", sign, group_amount(amount.abs()))
}

/// Format an amount as rupees without decimal places, used for slab bounds
pub fn format_inr_whole(amount: Decimal) -> String {
    format!("₹{}", group_indian(&amount.abs().trunc().to_string()))
}

/// Plain number with two decimals and no currency symbol (CSV / JSON output)
pub fn plain(amount: Decimal) -> String {
    format!("{:.2}", round_paise(amount))
}

fn group_amount(amount: Decimal) -> String {
    let formatted = format!("{:.2}", amount);
    match formatted.split_once('.') {
        Some((int, frac)) => format!("{}.{}", group_indian(int), frac),
        None => group_indian(&formatted),
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, last3) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (h, t) = rest.split_at(rest.len() - 2);
        groups.push(t);
        rest = h;
    }
    groups.push(rest);
    groups.reverse();
    format!("{},{}", groups.join(","), last3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn small_amounts_ungrouped() {
        assert_eq!(format_inr(dec!(0)), "₹0.00");
        assert_eq!(format_inr(dec!(999)), "₹999.00");
    }

    #[test]
    fn thousands() {
        assert_eq!(format_inr(dec!(1000)), "₹1,000.00");
        assert_eq!(format_inr(dec!(15000)), "₹15,000.00");
    }

    #[test]
    fn lakhs_and_crores() {
        assert_eq!(format_inr(dec!(250000)), "₹2,50,000.00");
        assert_eq!(format_inr(dec!(1234567.5)), "₹12,34,567.50");
        assert_eq!(format_inr(dec!(123456789)), "₹12,34,56,789.00");
    }

    #[test]
    fn rounds_to_paise() {
        assert_eq!(format_inr(dec!(112500.005)), "₹1,12,500.01");
        assert_eq!(format_inr(dec!(7500.456)), "₹7,500.46");
    }

    #[test]
    fn negative_amounts() {
        assert_eq!(format_inr(dec!(-25000)), "-₹25,000.00");
        assert_eq!(format_inr(dec!(-0.001)), "₹0.00");
    }

    #[test]
    fn whole_rupees() {
        assert_eq!(format_inr_whole(dec!(1000000)), "₹10,00,000");
        assert_eq!(format_inr_whole(dec!(0)), "₹0");
        assert_eq!(format_inr_whole(dec!(2400000)), "₹24,00,000");
    }

    #[test]
    fn plain_two_decimals() {
        assert_eq!(plain(dec!(307500)), "307500.00");
        assert_eq!(plain(dec!(0.5)), "0.50");
    }
}
