//! # Validation Module
//!
//! Checks applied to raw console input before anything is parsed or built.
//! Each check either returns `Ok(())` or an invalid-argument [`VoucherError`].

use crate::domain::VoucherType;
use crate::{Result, VoucherError};

/// Fails unless `raw` is exactly one of the [`VoucherType`] labels.
pub fn check_invalid_type(raw: &str) -> Result<()> {
    VoucherType::from(raw).map(|_| ())
}

/// Fails if `raw` is empty or whitespace only.
pub fn check_null_or_blank(raw: &str) -> Result<()> {
    if raw.trim().is_empty() {
        return Err(VoucherError::BlankName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_invalid_type() {
        assert!(check_invalid_type("정률 할인").is_ok());
        assert!(check_invalid_type("정액 할인").is_ok());
        assert!(matches!(check_invalid_type("퍼센트"), Err(VoucherError::InvalidVoucherType(_))));
    }

    #[test]
    fn test_check_null_or_blank() {
        assert!(check_null_or_blank("쿠폰").is_ok());
        assert!(check_null_or_blank("").is_err());
        assert!(check_null_or_blank(" \t\u{3000}").is_err());
    }
}
