//! Credit transactions observed on an account.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::common::*;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
/// A single dated credit. Immutable once ingested.
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: f64,
}

impl Transaction {
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self { date, amount }
    }

    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        self.amount
    }
}
