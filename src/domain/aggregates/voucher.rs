//! Voucher Aggregate

use chrono::NaiveDateTime;
use uuid::Uuid;
use crate::domain::value_objects::{DiscountAmount, DiscountPercent, MinimumPrice, ValidityPeriod, VoucherId, VoucherName};
use crate::domain::voucher_type::VoucherType;
use crate::Result;

/// Discount rule carried by a voucher
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Discount {
    Percent(DiscountPercent),
    Fixed(DiscountAmount),
}

impl Discount {
    pub fn voucher_type(&self) -> VoucherType {
        match self { Self::Percent(_) => VoucherType::Percent, Self::Fixed(_) => VoucherType::Fix }
    }
    pub fn value(&self) -> u32 {
        match self { Self::Percent(p) => u32::from(p.value()), Self::Fixed(a) => a.value() }
    }
    pub fn apply(&self, price: u64) -> u64 {
        match self { Self::Percent(p) => p.apply(price), Self::Fixed(a) => a.apply(price) }
    }
}

/// Immutable discount voucher. Every constructor validates, so an invalid voucher cannot exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Voucher {
    id: VoucherId,
    name: VoucherName,
    minimum_price: MinimumPrice,
    validity: ValidityPeriod,
    discount: Discount,
}

impl Voucher {
    pub fn percent(
        id: Uuid, name: impl Into<String>, minimum_price: Option<u64>,
        created_at: NaiveDateTime, expires_at: NaiveDateTime, percent: i64,
    ) -> Result<Self> {
        let (id, name, validity) = Self::common(id, name, created_at, expires_at)?;
        let discount = Discount::Percent(DiscountPercent::new(percent)?);
        Ok(Self { id, name, minimum_price: MinimumPrice::new(minimum_price.unwrap_or(0)), validity, discount })
    }

    pub fn fixed(
        id: Uuid, name: impl Into<String>, minimum_price: Option<u64>,
        created_at: NaiveDateTime, expires_at: NaiveDateTime, amount: i64,
    ) -> Result<Self> {
        let (id, name, validity) = Self::common(id, name, created_at, expires_at)?;
        let discount = Discount::Fixed(DiscountAmount::new(amount)?);
        Ok(Self { id, name, minimum_price: MinimumPrice::new(minimum_price.unwrap_or(0)), validity, discount })
    }

    fn common(
        id: Uuid, name: impl Into<String>, created_at: NaiveDateTime, expires_at: NaiveDateTime,
    ) -> Result<(VoucherId, VoucherName, ValidityPeriod)> {
        Ok((VoucherId::new(id)?, VoucherName::new(name)?, ValidityPeriod::new(created_at, expires_at)?))
    }

    pub fn id(&self) -> &VoucherId { &self.id }
    pub fn name(&self) -> &VoucherName { &self.name }
    pub fn minimum_price(&self) -> MinimumPrice { self.minimum_price }
    pub fn created_at(&self) -> NaiveDateTime { self.validity.created_at() }
    pub fn expires_at(&self) -> NaiveDateTime { self.validity.expires_at() }
    pub fn discount(&self) -> &Discount { &self.discount }
    pub fn voucher_type(&self) -> VoucherType { self.discount.voucher_type() }

    pub fn discounted_price(&self, original_price: u64) -> u64 { self.discount.apply(original_price) }
}
