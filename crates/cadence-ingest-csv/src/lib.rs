//! cadence-ingest-csv
//!
//! Reads `date,amount` CSV exports into a [`Ledger`]. Rows are validated here so the
//! profiling services only ever see well-formed transactions.

use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};

use cadence_domain::{Ledger, Transaction};
use chrono::NaiveDate;
use thiserror::Error;

pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

const DATE_COLUMN: usize = 0;
const AMOUNT_COLUMN: usize = 1;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("I/O error reading {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },
}

/// Configurable CSV reader; the first row is always treated as a header.
#[derive(Debug, Clone)]
pub struct CsvLedgerReader {
    date_format: String,
}

impl Default for CsvLedgerReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvLedgerReader {
    pub fn new() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<Ledger, IngestError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let ledger = self.read(file)?;
        tracing::info!(path = %path.display(), transactions = ledger.len(), "loaded ledger");
        Ok(ledger)
    }

    pub fn read<R: io::Read>(&self, input: R) -> Result<Ledger, IngestError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(input);

        let mut transactions = Vec::new();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map_or(0, |pos| pos.line());
            transactions.push(self.parse_record(&record, line)?);
        }
        Ok(Ledger::new(transactions))
    }

    fn parse_record(&self, record: &csv::StringRecord, line: u64) -> Result<Transaction, IngestError> {
        let malformed = |reason: String| IngestError::MalformedRow { line, reason };

        let raw_date = record
            .get(DATE_COLUMN)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| malformed("missing date".into()))?;
        let raw_amount = record
            .get(AMOUNT_COLUMN)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| malformed("missing amount".into()))?;

        let date = NaiveDate::parse_from_str(raw_date, &self.date_format).map_err(|err| {
            malformed(format!(
                "invalid date `{raw_date}` for format `{}`: {err}",
                self.date_format
            ))
        })?;
        let amount: f64 = raw_amount
            .parse()
            .map_err(|err| malformed(format!("invalid amount `{raw_amount}`: {err}")))?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(malformed(format!(
                "amount `{raw_amount}` must be a non-negative credit"
            )));
        }

        Ok(Transaction::new(date, amount))
    }
}

/// Reads a CSV file with the default `MM/DD/YYYY` date format.
pub fn load_ledger_from_path(path: impl AsRef<Path>) -> Result<Ledger, IngestError> {
    CsvLedgerReader::new().read_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_and_sorts_by_date() {
        let input = "date,credit\n02/01/2024,200.50\n01/01/2024, 100\n";
        let ledger = CsvLedgerReader::new().read(input.as_bytes()).unwrap();

        assert_eq!(ledger.len(), 2);
        assert_eq!(
            ledger.sorted()[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(ledger.total_amount(), 300.5);
    }

    #[test]
    fn header_only_yields_empty_ledger() {
        let ledger = CsvLedgerReader::new().read("date,credit\n".as_bytes()).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn reports_line_of_bad_amount() {
        let input = "date,credit\n01/01/2024,10\n01/08/2024,ten\n";
        let err = CsvLedgerReader::new().read(input.as_bytes()).unwrap_err();
        match err {
            IngestError::MalformedRow { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("ten"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_negative_and_non_finite_amounts() {
        for amount in ["-5", "NaN", "inf"] {
            let input = format!("date,credit\n01/01/2024,{amount}\n");
            let err = CsvLedgerReader::new().read(input.as_bytes()).unwrap_err();
            assert!(matches!(err, IngestError::MalformedRow { line: 2, .. }), "{amount}");
        }
    }

    #[test]
    fn rejects_missing_columns() {
        let err = CsvLedgerReader::new()
            .read("date,credit\n01/01/2024\n".as_bytes())
            .unwrap_err();
        assert!(err.to_string().contains("missing amount"), "{err}");
    }

    #[test]
    fn honours_custom_date_format() {
        let reader = CsvLedgerReader::new().with_date_format("%Y-%m-%d");
        let ledger = reader.read("date,credit\n2024-03-15,42\n".as_bytes()).unwrap();
        assert_eq!(ledger.sorted()[0].day_of_month(), 15);

        let err = reader.read("date,credit\n03/15/2024,42\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("invalid date"), "{err}");
    }
}
