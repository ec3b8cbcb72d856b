//! Voucher construction by type tag

use chrono::NaiveDateTime;
use uuid::Uuid;
use crate::domain::aggregates::Voucher;
use crate::domain::voucher_type::VoucherType;
use crate::Result;

pub struct VoucherFactory;

impl VoucherFactory {
    /// Builds the variant matching `voucher_type` under a fresh random id.
    pub fn of(
        voucher_type: VoucherType, name: impl Into<String>, minimum_price_condition: Option<u64>,
        created_at: NaiveDateTime, expires_at: NaiveDateTime, discount: i64,
    ) -> Result<Voucher> {
        let id = Uuid::new_v4();
        match voucher_type {
            VoucherType::Percent => Voucher::percent(id, name, minimum_price_condition, created_at, expires_at, discount),
            VoucherType::Fix => Voucher::fixed(id, name, minimum_price_condition, created_at, expires_at, discount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use crate::domain::Discount;
    use crate::VoucherError;

    fn now() -> NaiveDateTime { NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap() }

    #[test]
    fn test_dispatch_on_type() {
        let p = VoucherFactory::of(VoucherType::Percent, "p", None, now(), now() + Duration::days(1), 50).unwrap();
        assert!(matches!(p.discount(), Discount::Percent(_)));
        let f = VoucherFactory::of(VoucherType::Fix, "f", Some(1_000), now(), now() + Duration::days(1), 5_000).unwrap();
        assert!(matches!(f.discount(), Discount::Fixed(_)));
        assert_ne!(p.id(), f.id());
    }
    #[test]
    fn test_range_depends_on_type() {
        // 5000 is a valid amount but not a valid percentage
        assert!(matches!(
            VoucherFactory::of(VoucherType::Percent, "p", None, now(), now() + Duration::days(1), 5_000),
            Err(VoucherError::DiscountOutOfRange { min: 1, max: 100, .. })
        ));
        assert!(VoucherFactory::of(VoucherType::Fix, "f", None, now(), now() + Duration::days(1), 5).is_err());
    }
}
