//! Profile intake, eligibility scoring, and ranked scheme recommendations.
//!
//! The pipeline is pure: a validated [`UserProfile`], a shared [`SchemeCatalog`] and an instant
//! from a [`Clock`] fully determine the resulting [`RecommendationReport`].
//!
//! [`SchemeCatalog`]: crate::workflows::catalog::SchemeCatalog

pub mod alerts;
pub mod clock;
pub mod domain;
pub mod eligibility;
pub mod engine;
pub mod intake;
pub mod reasons;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

/// Schemes scoring below this are not recommended.
pub const MINIMUM_SCORE: u8 = 50;

/// Score at which a recommendation counts as highly eligible.
pub const HIGH_ELIGIBILITY_SCORE: u8 = 80;

pub use alerts::days_until;
pub use clock::{Clock, FixedClock, SystemClock};
pub use domain::{
    Alert, AlertKind, AlertPriority, Gender, RecommendationReport, RecommendationResult,
    UserProfile,
};
pub use engine::{RecommendationEngine, RecommendationPolicy};
pub use intake::{ProfileDraft, ProfileField, ValidationError, ValidationErrors, ValidationKind};
pub use report::{format_rupees, render_markdown};
pub use router::recommendation_router;
pub use scoring::{
    eligibility_score, score_breakdown, ScoreBreakdown, ScoreComponent, ScoreDimension,
};
pub use service::RecommendationService;
