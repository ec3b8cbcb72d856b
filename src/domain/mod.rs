//! Voucher domain model
pub mod aggregates;
pub mod factory;
pub mod value_objects;
pub mod voucher_type;

pub use aggregates::{Discount, Voucher};
pub use factory::VoucherFactory;
pub use voucher_type::VoucherType;
