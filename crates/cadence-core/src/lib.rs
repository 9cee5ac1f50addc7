//! cadence-core
//!
//! Bucketing, regularity scoring, classification and distribution services.
//! Depends on cadence-domain. No CLI, no terminal I/O, no file access.

pub mod bucketing_service;
pub mod classifier_service;
pub mod distribution_service;
pub mod error;
pub mod partition;
pub mod profile_service;
pub mod scoring;

pub use bucketing_service::*;
pub use classifier_service::*;
pub use distribution_service::*;
pub use error::CoreError;
pub use partition::*;
pub use profile_service::*;
pub use scoring::*;
