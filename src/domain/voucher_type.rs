//! Voucher type labels as typed on the console

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use crate::VoucherError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VoucherType {
    Percent,
    Fix,
}

impl VoucherType {
    pub const ALL: [VoucherType; 2] = [VoucherType::Percent, VoucherType::Fix];

    pub fn label(&self) -> &'static str {
        match self { Self::Percent => "정률 할인", Self::Fix => "정액 할인" }
    }

    /// Exact label match, no trimming.
    pub fn from(label: &str) -> Result<Self, VoucherError> {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == label)
            .ok_or_else(|| VoucherError::InvalidVoucherType(label.to_string()))
    }
}

impl FromStr for VoucherType {
    type Err = VoucherError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::from(s) }
}

impl Serialize for VoucherType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl fmt::Display for VoucherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}
