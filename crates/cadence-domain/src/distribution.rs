//! Frequency/probability profiles keyed by calendar day or weekday.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Key of a distribution bucket with a presentation label.
pub trait DistributionKey: Copy + PartialEq {
    fn label(&self) -> String;
}

impl DistributionKey for u32 {
    fn label(&self) -> String {
        self.to_string()
    }
}

impl DistributionKey for Weekday {
    fn label(&self) -> String {
        let name = match self {
            Weekday::Sun => "Sunday",
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
        };
        name.to_string()
    }
}

/// Weekday keys in presentation order, Sunday first.
pub const WEEKDAYS_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistributionEntry<K> {
    pub key: K,
    pub count: usize,
    pub total_observed_periods: usize,
    pub probability: f64,
}

impl<K> DistributionEntry<K> {
    pub fn new(key: K, count: usize, total_observed_periods: usize) -> Self {
        let probability = if total_observed_periods == 0 {
            0.0
        } else {
            count as f64 / total_observed_periods as f64
        };
        Self {
            key,
            count,
            total_observed_periods,
            probability,
        }
    }
}

pub type DayEntry = DistributionEntry<u32>;
pub type WeekdayEntry = DistributionEntry<Weekday>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Every key of a distribution in key order, including zero-count keys.
pub struct Distribution<K> {
    entries: Vec<DistributionEntry<K>>,
}

impl<K: DistributionKey> Distribution<K> {
    pub fn new(entries: Vec<DistributionEntry<K>>) -> Self {
        Self { entries }
    }

    /// Raw entries in key order.
    pub fn entries(&self) -> &[DistributionEntry<K>] {
        &self.entries
    }

    pub fn entry(&self, key: K) -> Option<&DistributionEntry<K>> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Probability for `key`; absent keys read as zero.
    pub fn probability(&self, key: K) -> f64 {
        self.entry(key).map_or(0.0, |entry| entry.probability)
    }

    pub fn total_probability(&self) -> f64 {
        self.entries.iter().map(|entry| entry.probability).sum()
    }

    /// Presentation view: descending by probability, zero-probability keys omitted.
    /// Equal probabilities keep key order.
    pub fn ranked(&self) -> Vec<&DistributionEntry<K>> {
        let mut ranked: Vec<&DistributionEntry<K>> = self
            .entries
            .iter()
            .filter(|entry| entry.probability > 0.0)
            .collect();
        ranked.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        ranked
    }
}

pub type DayDistribution = Distribution<u32>;
pub type WeekdayDistribution = Distribution<Weekday>;
