//! Value Objects for vouchers

use chrono::NaiveDateTime;
use std::fmt;
use uuid::Uuid;
use crate::validation::check_null_or_blank;
use crate::{Result, VoucherError};

/// Voucher identifier. The nil UUID stands for an absent identifier and is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VoucherId(Uuid);

impl VoucherId {
    pub fn new(id: Uuid) -> Result<Self> {
        if id.is_nil() { return Err(VoucherError::MissingId); }
        Ok(Self(id))
    }
    pub fn as_uuid(&self) -> &Uuid { &self.0 }
}

impl fmt::Display for VoucherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Non-blank voucher name, kept exactly as entered
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoucherName(String);

impl VoucherName {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        check_null_or_blank(&value)?;
        Ok(Self(value))
    }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for VoucherName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Minimum purchase amount before the voucher applies
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct MinimumPrice(u64);

impl MinimumPrice {
    pub fn new(value: u64) -> Self { Self(value) }
    pub fn value(&self) -> u64 { self.0 }
}

/// Creation and expiration timestamps; expiration is strictly after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidityPeriod { created_at: NaiveDateTime, expires_at: NaiveDateTime }

impl ValidityPeriod {
    pub fn new(created_at: NaiveDateTime, expires_at: NaiveDateTime) -> Result<Self> {
        if expires_at <= created_at {
            return Err(VoucherError::ExpirationNotAfterCreation { created_at, expires_at });
        }
        Ok(Self { created_at, expires_at })
    }
    pub fn created_at(&self) -> NaiveDateTime { self.created_at }
    pub fn expires_at(&self) -> NaiveDateTime { self.expires_at }
}

/// Percentage off the original price
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiscountPercent(u8);

impl DiscountPercent {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 100;

    pub fn new(value: i64) -> Result<Self> {
        let percent = check_range(value, Self::MIN, Self::MAX)?;
        Ok(Self(percent as u8))
    }
    pub fn value(&self) -> u8 { self.0 }

    /// The discount part is floored.
    pub fn apply(&self, price: u64) -> u64 {
        let discount = (u128::from(price) * u128::from(self.0) / 100) as u64;
        price - discount
    }
}

/// Fixed amount taken off the original price
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiscountAmount(u32);

impl DiscountAmount {
    pub const MIN: i64 = 10;
    pub const MAX: i64 = 10_000_000;

    pub fn new(value: i64) -> Result<Self> {
        let amount = check_range(value, Self::MIN, Self::MAX)?;
        Ok(Self(amount as u32))
    }
    pub fn value(&self) -> u32 { self.0 }
    pub fn apply(&self, price: u64) -> u64 { price.saturating_sub(u64::from(self.0)) }
}

fn check_range(value: i64, min: i64, max: i64) -> Result<i64> {
    if !(min..=max).contains(&value) {
        return Err(VoucherError::DiscountOutOfRange { value, min, max });
    }
    Ok(value)
}
