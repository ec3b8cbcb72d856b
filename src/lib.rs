//! Voucher Console
//!
//! Interactive console tool for issuing discount vouchers.
//!
//! ## Features
//! - Percent and fixed-amount discount vouchers
//! - Input validation and parsing from raw console lines
//! - In-memory voucher storage with insertion-ordered listing
//! - Text or JSON listing output

pub mod config;
pub mod console;
pub mod controller;
pub mod domain;
pub mod parser;
pub mod repository;
pub mod service;
pub mod validation;
pub mod view;

use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum VoucherError {
    #[error("존재하지 않는 명령어입니다: {0}")]
    InvalidCommand(String),

    #[error("존재하지 않는 바우처 타입입니다: {0}")]
    InvalidVoucherType(String),

    #[error("바우처 아이디가 존재하지 않습니다.")]
    MissingId,

    #[error("바우처 이름은 1자 이상이어야 합니다.")]
    BlankName,

    #[error("숫자를 입력해주세요: {0}")]
    NotANumber(String),

    #[error("올바르지 않은 날짜 형식입니다: {0} (yyyy-MM-dd 또는 yyyy-MM-dd HH:mm:ss.SSS)")]
    InvalidDate(String),

    #[error("만료기한은 생성일시 이후여야 합니다. (생성: {created_at}, 만료: {expires_at})")]
    ExpirationNotAfterCreation {
        created_at: chrono::NaiveDateTime,
        expires_at: chrono::NaiveDateTime,
    },

    #[error("할인 값은 {min} ~ {max} 사이여야 합니다: {value}")]
    DiscountOutOfRange { value: i64, min: i64, max: i64 },

    #[error("설정 값이 올바르지 않습니다: {0}")]
    InvalidConfig(String),

    #[error("바우처 출력 형식 변환 오류: {0}")]
    Render(#[from] serde_json::Error),

    #[error("콘솔 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
}

impl VoucherError {
    /// Recoverable input failures; rendering and console I/O failures are not.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Render(_))
    }
}

pub type Result<T> = std::result::Result<T, VoucherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_is_not_invalid_argument() {
        let io = VoucherError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert!(!io.is_invalid_argument());
        assert!(VoucherError::BlankName.is_invalid_argument());
        assert!(VoucherError::InvalidCommand("x".into()).is_invalid_argument());
    }

    #[test]
    fn test_json_failure_is_render_not_io() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = VoucherError::from(json_err);
        assert!(matches!(err, VoucherError::Render(_)));
        assert!(!err.is_invalid_argument());
    }
}
