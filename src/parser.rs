//! Raw console text to typed values.

use chrono::{NaiveDate, NaiveDateTime};
use crate::{Result, VoucherError};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
// '0' marks a required ASCII digit, anything else must match literally
const DATE_SHAPE: &str = "0000-00-00";
const DATE_TIME_SHAPE: &str = "0000-00-00 00:00:00.000";

/// Blank means no condition (0).
pub fn parse_to_minimum_price_condition(raw: &str) -> Result<u64> {
    if raw.trim().is_empty() {
        return Ok(0);
    }
    raw.parse::<u64>().map_err(|_| VoucherError::NotANumber(raw.to_string()))
}

/// A bare date expands to the last millisecond of that day.
pub fn parse_to_local_date_time(raw: &str) -> Result<NaiveDateTime> {
    let invalid = || VoucherError::InvalidDate(raw.to_string());
    if matches_shape(raw, DATE_SHAPE) {
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .ok()
            .and_then(|date| date.and_hms_milli_opt(23, 59, 59, 999))
            .ok_or_else(invalid)
    } else if matches_shape(raw, DATE_TIME_SHAPE) {
        NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT).map_err(|_| invalid())
    } else {
        Err(invalid())
    }
}

fn matches_shape(raw: &str, shape: &str) -> bool {
    raw.len() == shape.len()
        && raw.bytes().zip(shape.bytes()).all(|(r, s)| if s == b'0' { r.is_ascii_digit() } else { r == s })
}

/// Only the numeric shape is checked here; the bound depends on the voucher type.
pub fn parse_to_amount_or_percent(raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|_| VoucherError::NotANumber(raw.to_string()))
}
