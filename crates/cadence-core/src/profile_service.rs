//! Classification plus distributions for each ledger segment.

use serde::Serialize;

use cadence_domain::{DayDistribution, Ledger, WeekdayDistribution};

use crate::{
    ClassificationResult, ClassifierOptions, ClassifierService, CoreError, DistributionService,
    LedgerPartitioner,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentProfile {
    pub label: String,
    pub classification: ClassificationResult,
    pub days: DayDistribution,
    pub weekdays: WeekdayDistribution,
}

impl SegmentProfile {
    pub fn analyze(
        label: impl Into<String>,
        ledger: &Ledger,
        options: &ClassifierOptions,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            label: label.into(),
            days: DistributionService::by_day_of_month(ledger)?,
            weekdays: DistributionService::by_weekday(ledger)?,
            classification: ClassifierService::classify(ledger, options)?,
        })
    }
}

pub struct ProfileService;

impl ProfileService {
    /// Profiles segments in partition order, stopping at the first empty one.
    pub fn profile<P: LedgerPartitioner + ?Sized>(
        ledger: &Ledger,
        partitioner: &P,
        options: &ClassifierOptions,
    ) -> Result<Vec<SegmentProfile>, CoreError> {
        let mut profiles = Vec::new();
        for segment in partitioner.partition(ledger) {
            if segment.ledger.is_empty() {
                tracing::debug!(segment = %segment.label, "empty segment; stopping");
                break;
            }
            profiles.push(SegmentProfile::analyze(segment.label, &segment.ledger, options)?);
        }

        if profiles.is_empty() {
            return Err(CoreError::EmptyLedger);
        }
        Ok(profiles)
    }
}
