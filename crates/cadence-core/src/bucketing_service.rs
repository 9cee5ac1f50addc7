//! Partitions a ledger into consecutive calendar-aligned windows.

use chrono::NaiveDate;

use cadence_domain::{Granularity, Ledger, TimeInterval, Transaction, WeekStart, Window};

use crate::CoreError;

/// Splits ledgers into windows for a granularity.
pub struct BucketingService;

impl BucketingService {
    /// Covers the ledger's whole observed range with contiguous windows and assigns every
    /// transaction to the unique window `start <= date < end`. Empty windows are kept.
    pub fn bucket(
        ledger: &Ledger,
        granularity: Granularity,
        week_start: WeekStart,
    ) -> Result<Vec<Window>, CoreError> {
        let (date_min, date_max) = ledger.date_range()?;
        let interval = granularity.interval();
        let anchor = interval
            .normalize_anchor(date_min, week_start)
            .ok_or(CoreError::DateOutOfRange(date_min))?;
        let end = interval
            .ceiling(date_max, week_start)
            .ok_or(CoreError::DateOutOfRange(date_max))?;

        let mut windows = Self::windows_between(interval, anchor, end)?;
        Self::assign(&mut windows, ledger.sorted());

        tracing::debug!(
            granularity = %granularity,
            windows = windows.len(),
            %anchor,
            %end,
            "bucketed ledger"
        );
        Ok(windows)
    }

    /// Empty windows `[start, start + step)` from `anchor` until a start reaches `end`.
    /// Fails rather than shortening a window that would run past the calendar.
    pub fn windows_between(
        interval: TimeInterval,
        anchor: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Window>, CoreError> {
        let mut windows = Vec::new();
        let mut start = anchor;
        while start < end {
            let next = interval
                .next_date(start)
                .ok_or(CoreError::DateOutOfRange(start))?;
            windows.push(Window::new(start, next));
            start = next;
        }
        Ok(windows)
    }

    /// Single merge pass over time-ordered windows and date-sorted transactions.
    fn assign(windows: &mut [Window], transactions: &[Transaction]) {
        let mut remaining = transactions;
        for window in windows.iter_mut() {
            let before = remaining.partition_point(|txn| txn.date < window.start);
            remaining = &remaining[before..];
            let inside = remaining.partition_point(|txn| txn.date < window.end);
            window.transactions.extend_from_slice(&remaining[..inside]);
            remaining = &remaining[inside..];
        }
    }
}
