#![doc(test(attr(deny(warnings))))]

//! Cadence classifies an account's recurring-payment cadence (monthly, bi-weekly, weekly)
//! from its credit ledger and reports which days and weekdays credits tend to land on.

pub mod cli;
pub mod config;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        let build = utils::build_info::current();
        tracing::info!("Cadence tracing initialized.");
        tracing::debug!(
            version = build.version,
            git_hash = build.git_hash,
            git_status = build.git_status,
            timestamp = build.timestamp,
            target = build.target,
            profile = build.profile,
            "build metadata"
        );
    });
}
