//! Input checks shared by the use cases

use rust_decimal::Decimal;

use crate::error::UseCaseError;

/// Reject negative money amounts before they reach a gateway
pub(crate) fn ensure_non_negative(field: &str, value: Decimal) -> Result<(), UseCaseError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(UseCaseError::Validation(format!(
            "{} must not be negative, got {}",
            field, value
        )));
    }
    Ok(())
}
