use super::alerts::alerts_for;
use super::clock::Clock;
use super::domain::{RecommendationReport, RecommendationResult, UserProfile};
use super::eligibility::{clears_threshold, passes_geography_gate};
use super::reasons::explain;
use super::report::summarize;
use super::scoring::eligibility_score;
use super::MINIMUM_SCORE;
use crate::workflows::catalog::SchemeCatalog;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Tunables applied by the engine when filtering scored schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationPolicy {
    pub minimum_score: u8,
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self {
            minimum_score: MINIMUM_SCORE,
        }
    }
}

/// Stateless evaluator that turns a catalog and a profile into ranked recommendations.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    policy: RecommendationPolicy,
}

impl RecommendationEngine {
    pub fn new(policy: RecommendationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> RecommendationPolicy {
        self.policy
    }

    /// Eligible schemes ordered by descending score. Ties keep catalog order.
    pub fn recommend(
        &self,
        catalog: &SchemeCatalog,
        profile: &UserProfile,
        now: DateTime<Utc>,
    ) -> Vec<RecommendationResult> {
        let mut results: Vec<RecommendationResult> = catalog
            .schemes()
            .iter()
            .filter(|scheme| passes_geography_gate(scheme, profile))
            .filter_map(|scheme| {
                let score = eligibility_score(scheme, profile);
                if !clears_threshold(score, self.policy.minimum_score) {
                    debug!(scheme_id = %scheme.scheme_id, score, "scheme below threshold");
                    return None;
                }

                Some(RecommendationResult {
                    scheme: Arc::clone(scheme),
                    eligibility_score: score,
                    reasons: explain(scheme, profile, score),
                    alerts: alerts_for(scheme, score, now),
                })
            })
            .collect();

        // `sort_by` is stable, which keeps catalog order among equal scores.
        results.sort_by(|left, right| right.eligibility_score.cmp(&left.eligibility_score));
        results
    }

    pub fn generate_report(
        &self,
        catalog: &SchemeCatalog,
        profile: &UserProfile,
        clock: &dyn Clock,
    ) -> RecommendationReport {
        let generated_at = clock.now();
        let recommendations = self.recommend(catalog, profile, generated_at);
        let total_schemes_analyzed = catalog.active_count();
        let summary = summarize(&recommendations);

        info!(
            state = %profile.state,
            category = %profile.category,
            analyzed = total_schemes_analyzed,
            eligible = recommendations.len(),
            "recommendation report generated"
        );

        RecommendationReport {
            generated_at,
            user_profile: profile.clone(),
            total_schemes_analyzed,
            eligible_schemes_count: recommendations.len(),
            recommendations,
            summary,
        }
    }
}
