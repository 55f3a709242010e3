//! Foundation types for CID Sentinel.
//!
//! This crate provides the passive value types shared by the rest of the
//! sentinel core. Nothing here enforces policy; these are records that the
//! crypto and verification layers decorate.
//!
//! # Key Types
//!
//! - [`PackRef`]: a versioned, optionally signed package artifact reference
//! - [`Slo`]: Service Level Objective target (data shape only)
//! - [`VerificationResult`]: outcome of checking a pack reference
//! - [`DashboardMetrics`]: aggregate counters for dashboard display
//! - [`Timestamp`]: wall-clock milliseconds since the Unix epoch

pub mod error;
pub mod metrics;
pub mod pack;
pub mod slo;
pub mod time;
pub mod verification;

pub use error::TypeError;
pub use metrics::DashboardMetrics;
pub use pack::PackRef;
pub use slo::Slo;
pub use time::Timestamp;
pub use verification::VerificationResult;
