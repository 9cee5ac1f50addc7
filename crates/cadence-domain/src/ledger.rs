//! Chronological transaction ledger for a single account.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{common::*, transaction::Transaction};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Transaction>", into = "Vec<Transaction>")]
/// Ordered collection of an account's credits.
///
/// Transactions are sorted ascending by date on construction; equal dates keep their
/// input order.
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new(mut transactions: Vec<Transaction>) -> Self {
        transactions.sort_by_key(|txn| txn.date);
        Self { transactions }
    }

    pub fn sorted(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Earliest and latest transaction dates.
    pub fn date_range(&self) -> Result<(NaiveDate, NaiveDate), EmptyLedgerError> {
        match (self.transactions.first(), self.transactions.last()) {
            (Some(first), Some(last)) => Ok((first.date, last.date)),
            _ => Err(EmptyLedgerError),
        }
    }

    /// Transactions with `start <= date < end`, in date order.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> &[Transaction] {
        if end <= start {
            return &[];
        }
        let lower = self.transactions.partition_point(|txn| txn.date < start);
        let upper = self.transactions.partition_point(|txn| txn.date < end);
        &self.transactions[lower..upper]
    }

    pub fn total_amount(&self) -> f64 {
        total_amount(&self.transactions)
    }

    pub fn into_transactions(self) -> Vec<Transaction> {
        self.transactions
    }
}

impl From<Vec<Transaction>> for Ledger {
    fn from(transactions: Vec<Transaction>) -> Self {
        Ledger::new(transactions)
    }
}

impl From<Ledger> for Vec<Transaction> {
    fn from(ledger: Ledger) -> Self {
        ledger.transactions
    }
}

impl FromIterator<Transaction> for Ledger {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Ledger::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Raised when an operation needs at least one transaction.
pub struct EmptyLedgerError;

impl fmt::Display for EmptyLedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ledger has no transactions")
    }
}

impl std::error::Error for EmptyLedgerError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn construction_sorts_and_keeps_equal_dates_stable() {
        let ledger = Ledger::new(vec![
            Transaction::new(date(2024, 3, 1), 3.0),
            Transaction::new(date(2024, 1, 1), 1.0),
            Transaction::new(date(2024, 3, 1), 4.0),
            Transaction::new(date(2024, 2, 1), 2.0),
        ]);

        let amounts: Vec<f64> = ledger.sorted().iter().map(|txn| txn.amount).collect();
        assert_eq!(amounts, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            ledger.date_range().unwrap(),
            (date(2024, 1, 1), date(2024, 3, 1))
        );
    }

    #[test]
    fn empty_ledger_has_no_date_range() {
        let ledger = Ledger::default();
        assert!(ledger.is_empty());
        assert_eq!(ledger.date_range(), Err(EmptyLedgerError));
    }

    #[test]
    fn between_is_half_open() {
        let ledger: Ledger = [1, 5, 10, 15]
            .into_iter()
            .map(|day| Transaction::new(date(2024, 1, day), f64::from(day)))
            .collect();

        let slice = ledger.between(date(2024, 1, 5), date(2024, 1, 15));
        let days: Vec<u32> = slice.iter().map(|txn| txn.day_of_month()).collect();
        assert_eq!(days, vec![5, 10]);
        assert!(ledger.between(date(2024, 1, 15), date(2024, 1, 5)).is_empty());
    }

    #[test]
    fn deserializing_resorts_transactions() {
        let json = r#"[
            {"date": "2024-05-02", "amount": 20.0},
            {"date": "2024-05-01", "amount": 10.0}
        ]"#;
        let ledger: Ledger = serde_json::from_str(json).expect("deserialize ledger");

        assert_eq!(ledger.sorted()[0].date, date(2024, 5, 1));
        assert_eq!(ledger.total_amount(), 30.0);
    }
}
