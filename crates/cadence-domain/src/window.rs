//! Calendar-aligned time slices holding bucketed transactions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{common::*, transaction::Transaction};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Half-open window `[start, end)` and the transactions that fall inside it.
pub struct Window {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub transactions: Vec<Transaction>,
}

impl Window {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            transactions: Vec::new(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn total_amount(&self) -> f64 {
        total_amount(&self.transactions)
    }
}
