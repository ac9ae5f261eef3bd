//! Eligibility scoring and recommendation engine for government welfare schemes.
//!
//! The [`workflows::catalog`] module owns the immutable scheme catalog and its importers, while
//! [`workflows::recommendation`] scores a validated applicant profile against that catalog and
//! assembles the ranked, explained report.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
