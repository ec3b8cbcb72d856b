//! Voucher storage

use indexmap::IndexMap;
use crate::domain::value_objects::VoucherId;
use crate::domain::Voucher;

/// Storage contract used by the voucher service.
pub trait VoucherRepository {
    /// Stores the voucher under its id; an existing entry with the same id is replaced.
    fn add(&mut self, voucher: Voucher);

    /// All vouchers in insertion order.
    fn find_all(&self) -> Vec<&Voucher>;
}

/// Process-local store, lost on exit.
#[derive(Debug, Default)]
pub struct InMemoryVoucherRepository {
    vouchers: IndexMap<VoucherId, Voucher>,
}

impl InMemoryVoucherRepository {
    pub fn new() -> Self { Self::default() }
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize { self.vouchers.len() }
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool { self.vouchers.is_empty() }
}

impl VoucherRepository for InMemoryVoucherRepository {
    fn add(&mut self, voucher: Voucher) {
        self.vouchers.insert(*voucher.id(), voucher);
    }

    fn find_all(&self) -> Vec<&Voucher> {
        self.vouchers.values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use uuid::Uuid;

    fn now() -> NaiveDateTime { NaiveDate::from_ymd_opt(2024, 5, 5).unwrap().and_hms_opt(0, 0, 0).unwrap() }

    fn voucher(id: Uuid, name: &str) -> Voucher {
        Voucher::fixed(id, name, None, now(), now() + Duration::days(30), 1_000).unwrap()
    }

    #[test]
    fn test_insertion_order() {
        let mut repo = InMemoryVoucherRepository::new();
        assert!(repo.is_empty());
        for name in ["c", "a", "b"] { repo.add(voucher(Uuid::new_v4(), name)); }
        let names: Vec<&str> = repo.find_all().iter().map(|v| v.name().as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_same_id_last_write_wins() {
        let mut repo = InMemoryVoucherRepository::new();
        let id = Uuid::new_v4();
        repo.add(voucher(id, "first"));
        repo.add(voucher(Uuid::new_v4(), "other"));
        repo.add(voucher(id, "second"));
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.find_all()[0].name().as_str(), "second");
    }
}
