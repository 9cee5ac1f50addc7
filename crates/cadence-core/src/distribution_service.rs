//! Day-of-month and weekday frequency distributions.

use cadence_domain::{
    DayDistribution, DayEntry, Ledger, WeekdayDistribution, WeekdayEntry, WEEKDAYS_FROM_SUNDAY,
};

use crate::CoreError;

const DAYS_IN_LONGEST_MONTH: usize = 31;

/// Probability that a credit lands on a given calendar day or weekday.
///
/// The denominator is the ledger's transaction count, so each distribution sums to one.
pub struct DistributionService;

impl DistributionService {
    /// Entries for days 1 through 31, in day order.
    pub fn by_day_of_month(ledger: &Ledger) -> Result<DayDistribution, CoreError> {
        if ledger.is_empty() {
            return Err(CoreError::EmptyLedger);
        }
        let mut counts = [0usize; DAYS_IN_LONGEST_MONTH];
        for txn in ledger.sorted() {
            counts[txn.day_of_month() as usize - 1] += 1;
        }

        let total = ledger.len();
        let entries = (1u32..)
            .zip(counts)
            .map(|(day, count)| DayEntry::new(day, count, total))
            .collect();
        tracing::debug!(transactions = total, "computed day-of-month distribution");
        Ok(DayDistribution::new(entries))
    }

    /// Entries for Sunday through Saturday.
    pub fn by_weekday(ledger: &Ledger) -> Result<WeekdayDistribution, CoreError> {
        if ledger.is_empty() {
            return Err(CoreError::EmptyLedger);
        }
        let mut counts = [0usize; 7];
        for txn in ledger.sorted() {
            counts[txn.weekday().num_days_from_sunday() as usize] += 1;
        }

        let total = ledger.len();
        let entries = WEEKDAYS_FROM_SUNDAY
            .into_iter()
            .zip(counts)
            .map(|(weekday, count)| WeekdayEntry::new(weekday, count, total))
            .collect();
        tracing::debug!(transactions = total, "computed weekday distribution");
        Ok(WeekdayDistribution::new(entries))
    }
}
