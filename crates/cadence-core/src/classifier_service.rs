//! Ranks granularities by regularity to classify an account's payment cadence.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use cadence_domain::{Granularity, Ledger, WeekStart, Window};

use crate::{BucketingService, CoreError, RegularityScorer, WindowStatistics};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Explicit run configuration for classification services.
pub struct ClassifierOptions {
    pub week_start: WeekStart,
    /// Attach per-granularity window statistics to the result. Never affects scores.
    pub diagnostics: bool,
}

impl ClassifierOptions {
    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Score and windows for one granularity.
pub struct RankedGranularity {
    pub granularity: Granularity,
    pub score: f64,
    pub windows: Vec<Window>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<WindowStatistics>,
}

impl RankedGranularity {
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    pub fn occupied_windows(&self) -> usize {
        self.windows.iter().filter(|w| !w.is_empty()).count()
    }

    pub fn total_amount(&self) -> f64 {
        self.windows.iter().map(Window::total_amount).sum()
    }

    /// Mean of per-window totals; empty windows count as zero.
    pub fn average_per_window(&self) -> f64 {
        if self.windows.is_empty() {
            return 0.0;
        }
        self.total_amount() / self.windows.len() as f64
    }

    /// Total credited divided by the number of windows holding at least one transaction.
    pub fn overall_average(&self) -> f64 {
        match self.occupied_windows() {
            0 => 0.0,
            occupied => self.total_amount() / occupied as f64,
        }
    }

    fn rank_order(&self, other: &Self) -> Ordering {
        other.score.total_cmp(&self.score).then_with(|| {
            other
                .granularity
                .tie_break_priority()
                .cmp(&self.granularity.tie_break_priority())
        })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
/// Ranked entries for every granularity, best first.
pub struct ClassificationResult {
    entries: Vec<RankedGranularity>,
}

impl ClassificationResult {
    pub fn entries(&self) -> &[RankedGranularity] {
        &self.entries
    }

    /// The top-ranked granularity.
    pub fn classification(&self) -> &RankedGranularity {
        &self.entries[0]
    }

    pub fn entry(&self, granularity: Granularity) -> Option<&RankedGranularity> {
        self.entries
            .iter()
            .find(|entry| entry.granularity == granularity)
    }

    pub fn average_per_window(&self) -> f64 {
        self.classification().average_per_window()
    }

    pub fn overall_average(&self) -> f64 {
        self.classification().overall_average()
    }
}

/// Runs bucketing and scoring for every granularity and ranks the outcomes.
pub struct ClassifierService;

impl ClassifierService {
    pub fn classify(
        ledger: &Ledger,
        options: &ClassifierOptions,
    ) -> Result<ClassificationResult, CoreError> {
        if ledger.is_empty() {
            return Err(CoreError::EmptyLedger);
        }

        let mut entries = Vec::with_capacity(Granularity::ALL.len());
        for granularity in Granularity::ALL {
            let windows = BucketingService::bucket(ledger, granularity, options.week_start)?;
            let score = RegularityScorer::score(&windows);
            let statistics = if options.diagnostics {
                WindowStatistics::from_windows(&windows)
            } else {
                None
            };

            tracing::debug!(granularity = %granularity, score, windows = windows.len(), "scored");
            if let Some(stats) = statistics {
                tracing::debug!(
                    granularity = %granularity,
                    "statistics: {:.2} ± {:.2}",
                    stats.mean,
                    stats.std_dev
                );
            }

            entries.push(RankedGranularity {
                granularity,
                score,
                windows,
                statistics,
            });
        }

        entries.sort_by(RankedGranularity::rank_order);

        let result = ClassificationResult { entries };
        tracing::debug!(
            classification = %result.classification().granularity,
            score = result.classification().score,
            "classified ledger"
        );
        Ok(result)
    }
}
