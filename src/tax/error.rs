use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TaxError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("invalid input: {field} must not be negative (got {value})")]
    InvalidInput { field: &'static str, value: Decimal },
    #[error("invalid input: {0} is too large")]
    Overflow(&'static str),
}

/// Reject negative amounts instead of silently clamping them.
pub fn ensure_non_negative(field: &'static str, value: Decimal) -> Result<Decimal, TaxError> {
    if value.is_sign_negative() && !value.is_zero() {
        Err(TaxError::InvalidInput { field, value })
    } else {
        Ok(value)
    }
}

/// Sum amounts, failing instead of panicking when the total leaves `Decimal` range.
pub fn checked_sum(
    field: &'static str,
    amounts: impl IntoIterator<Item = Decimal>,
) -> Result<Decimal, TaxError> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
        .ok_or(TaxError::Overflow(field))
}
