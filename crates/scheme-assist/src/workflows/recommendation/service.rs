use std::sync::Arc;

use super::clock::Clock;
use super::domain::{RecommendationReport, UserProfile};
use super::engine::{RecommendationEngine, RecommendationPolicy};
use super::intake::{ProfileDraft, ValidationErrors};
use crate::workflows::catalog::{CatalogStats, SchemeCatalog};

/// Service composing profile intake, the shared catalog, and the recommendation engine.
pub struct RecommendationService<C> {
    catalog: Arc<SchemeCatalog>,
    engine: RecommendationEngine,
    clock: C,
}

impl<C> RecommendationService<C>
where
    C: Clock + 'static,
{
    pub fn new(catalog: Arc<SchemeCatalog>, clock: C) -> Self {
        Self::with_policy(catalog, clock, RecommendationPolicy::default())
    }

    pub fn with_policy(catalog: Arc<SchemeCatalog>, clock: C, policy: RecommendationPolicy) -> Self {
        Self {
            catalog,
            engine: RecommendationEngine::new(policy),
            clock,
        }
    }

    /// Validate raw input and build a report for it.
    pub fn recommend(&self, draft: ProfileDraft) -> Result<RecommendationReport, ValidationErrors> {
        let profile = draft.validate()?;
        Ok(self.report_for(&profile))
    }

    pub fn report_for(&self, profile: &UserProfile) -> RecommendationReport {
        self.engine
            .generate_report(&self.catalog, profile, &self.clock)
    }

    pub fn catalog(&self) -> &SchemeCatalog {
        &self.catalog
    }

    pub fn stats(&self) -> CatalogStats {
        self.catalog.stats()
    }
}
