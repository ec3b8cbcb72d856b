//! Voucher use cases and the DTOs crossing the console boundary.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};
use uuid::Uuid;
use crate::domain::{Discount, Voucher, VoucherFactory, VoucherType};
use crate::repository::VoucherRepository;
use crate::Result;

const DISPLAY_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Source of the creation timestamp.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime { Local::now().naive_local() }
}

#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock(pub NaiveDateTime);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime { self.0 }
}

// =============================================================================
// DTOs
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoucherCreationRequest {
    pub voucher_type: String,
    pub name: String,
    pub minimum_price_condition: u64,
    pub expires_at: NaiveDateTime,
    pub discount: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VoucherResponse {
    pub id: Uuid,
    pub voucher_type: VoucherType,
    pub name: String,
    pub minimum_price_condition: u64,
    pub discount: u32,
    pub created_at: NaiveDateTime,
    pub expires_at: NaiveDateTime,
}

impl From<&Voucher> for VoucherResponse {
    fn from(v: &Voucher) -> Self {
        Self {
            id: *v.id().as_uuid(),
            voucher_type: v.voucher_type(),
            name: v.name().to_string(),
            minimum_price_condition: v.minimum_price().value(),
            discount: v.discount().value(),
            created_at: v.created_at(),
            expires_at: v.expires_at(),
        }
    }
}

impl fmt::Display for VoucherResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.voucher_type { VoucherType::Percent => "%", VoucherType::Fix => "원" };
        write!(
            f,
            "[{}] {} | 할인: {}{} | 최소 주문 금액: {}원 | 생성: {} | 만료: {} | ID: {}",
            self.voucher_type,
            self.name,
            self.discount,
            unit,
            self.minimum_price_condition,
            self.created_at.format(DISPLAY_DATE_TIME_FORMAT),
            self.expires_at.format(DISPLAY_DATE_TIME_FORMAT),
            self.id,
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VoucherResponses {
    pub voucher_responses: Vec<VoucherResponse>,
}

// =============================================================================
// Service
// =============================================================================

pub struct VoucherService<R, C> {
    repository: R,
    clock: C,
}

impl<R: VoucherRepository, C: Clock> VoucherService<R, C> {
    pub fn new(repository: R, clock: C) -> Self { Self { repository, clock } }

    /// Builds a voucher stamped with the current time and stores it.
    pub fn create(&mut self, request: VoucherCreationRequest) -> Result<VoucherResponse> {
        let voucher_type = VoucherType::from(&request.voucher_type)?;
        let voucher = VoucherFactory::of(
            voucher_type,
            request.name,
            Some(request.minimum_price_condition),
            self.clock.now(),
            request.expires_at,
            request.discount,
        )?;
        let response = VoucherResponse::from(&voucher);
        info!(voucher_id = %voucher.id(), voucher_type = %voucher_type, discount = %discount_label(voucher.discount()), "voucher created");
        self.repository.add(voucher);
        Ok(response)
    }

    pub fn list(&self) -> VoucherResponses {
        let voucher_responses: Vec<VoucherResponse> = self.repository.find_all().into_iter().map(VoucherResponse::from).collect();
        debug!(count = voucher_responses.len(), "listing vouchers");
        VoucherResponses { voucher_responses }
    }
}

fn discount_label(discount: &Discount) -> String {
    match discount {
        Discount::Percent(p) => format!("{}%", p.value()),
        Discount::Fixed(a) => format!("{}", a.value()),
    }
}
