//! Recurrence granularities evaluated by the classifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::{TimeInterval, TimeUnit};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
/// Calendar periodicity a recurring payment may follow.
pub enum Granularity {
    Monthly,
    BiWeekly,
    Weekly,
}

impl Granularity {
    /// Evaluation order used by the classifier.
    pub const ALL: [Granularity; 3] = [
        Granularity::Monthly,
        Granularity::BiWeekly,
        Granularity::Weekly,
    ];

    /// Fixed window step; windows align to the boundary of the step's unit.
    pub fn interval(self) -> TimeInterval {
        match self {
            Granularity::Monthly => TimeInterval::new(1, TimeUnit::Month),
            Granularity::BiWeekly => TimeInterval::new(2, TimeUnit::Week),
            Granularity::Weekly => TimeInterval::new(1, TimeUnit::Week),
        }
    }

    /// Tie-break rank; higher wins when scores are equal (finer granularity preferred).
    pub fn tie_break_priority(self) -> u8 {
        match self {
            Granularity::Monthly => 0,
            Granularity::BiWeekly => 1,
            Granularity::Weekly => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Monthly => "monthly",
            Granularity::BiWeekly => "biweekly",
            Granularity::Weekly => "weekly",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
