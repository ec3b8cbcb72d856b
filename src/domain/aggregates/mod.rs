//! Aggregates module
pub mod voucher;

pub use voucher::{Discount, Voucher};
