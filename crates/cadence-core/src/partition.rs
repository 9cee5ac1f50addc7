//! Pluggable split of one ledger into labelled segments before profiling.

use serde::Serialize;

use cadence_domain::Ledger;

pub const PRIMARY_SEGMENT: &str = "primary";
pub const SECONDARY_SEGMENT: &str = "secondary";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSegment {
    pub label: String,
    pub ledger: Ledger,
}

impl LedgerSegment {
    pub fn new(label: impl Into<String>, ledger: Ledger) -> Self {
        Self {
            label: label.into(),
            ledger,
        }
    }
}

/// Produces the ordered segments a ledger is profiled as.
pub trait LedgerPartitioner {
    fn partition(&self, ledger: &Ledger) -> Vec<LedgerSegment>;
}

/// Profiles the ledger as a single primary segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeLedger;

impl LedgerPartitioner for WholeLedger {
    fn partition(&self, ledger: &Ledger) -> Vec<LedgerSegment> {
        vec![LedgerSegment::new(PRIMARY_SEGMENT, ledger.clone())]
    }
}
