use cadence_domain::EmptyLedgerError;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Ledger is empty: at least one transaction is required")]
    EmptyLedger,

    #[error("Date {0} is outside the range calendar windows can cover")]
    DateOutOfRange(NaiveDate),
}

impl From<EmptyLedgerError> for CoreError {
    fn from(_: EmptyLedgerError) -> Self {
        CoreError::EmptyLedger
    }
}
