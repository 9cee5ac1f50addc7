//! cadence-domain
//!
//! Pure value types for recurring-payment profiling (Transaction, Ledger, Granularity,
//! Window, Distribution). No I/O, no CLI. Only data types and core enums.

pub mod common;
pub mod distribution;
pub mod granularity;
pub mod ledger;
pub mod transaction;
pub mod window;

pub use common::*;
pub use distribution::*;
pub use granularity::*;
pub use ledger::*;
pub use transaction::*;
pub use window::*;
