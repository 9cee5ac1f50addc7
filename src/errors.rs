use std::result::Result as StdResult;

use cadence_config::ConfigError as CadenceConfigError;
use cadence_core::CoreError;
use cadence_ingest_csv::IngestError;
use thiserror::Error;

/// Unified error type for the ingestion, profiling and configuration layers.
#[derive(Error, Debug)]
pub enum CadenceError {
    #[error("Ledger is empty: at least one transaction is required")]
    EmptyLedger,
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Storage error: {0}")]
    StorageError(String),
}

pub type Result<T> = StdResult<T, CadenceError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CadenceError),
    #[error("Output failed: {0}")]
    Output(String),
}

impl From<CoreError> for CadenceError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptyLedger => CadenceError::EmptyLedger,
            out_of_range @ CoreError::DateOutOfRange(_) => {
                CadenceError::InvalidInput(out_of_range.to_string())
            }
        }
    }
}

impl From<IngestError> for CadenceError {
    fn from(err: IngestError) -> Self {
        match err {
            io @ IngestError::Io { .. } => CadenceError::StorageError(io.to_string()),
            malformed @ (IngestError::Csv(_) | IngestError::MalformedRow { .. }) => {
                CadenceError::MalformedInput(malformed.to_string())
            }
        }
    }
}

impl From<CadenceConfigError> for CadenceError {
    fn from(err: CadenceConfigError) -> Self {
        match err {
            io @ CadenceConfigError::Io { .. } => CadenceError::StorageError(io.to_string()),
            CadenceConfigError::Serde(message) => CadenceError::ConfigError(message),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Output(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(err.to_string())
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::from(CadenceError::from(err))
    }
}

impl From<IngestError> for CliError {
    fn from(err: IngestError) -> Self {
        CliError::from(CadenceError::from(err))
    }
}

impl From<CadenceConfigError> for CliError {
    fn from(err: CadenceConfigError) -> Self {
        CliError::from(CadenceError::from(err))
    }
}
