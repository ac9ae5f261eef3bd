use crate::workflows::catalog::{Scheme, SchemeCategory, NATIONWIDE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Validated applicant attributes. Only produced by [`super::intake::ProfileDraft::validate`]
/// or by callers that uphold the same bounds (age 0-120, non-empty state).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub state: String,
    pub age: u8,
    pub annual_income: u64,
    pub category: SchemeCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl UserProfile {
    /// Applicant asked for schemes in every state.
    pub fn wants_nationwide(&self) -> bool {
        self.state == NATIONWIDE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    HighEligibility,
    DeadlineApproaching,
    NewScheme,
    PerfectMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertPriority {
    High,
    Medium,
    Low,
}

impl AlertPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Traffic-light marker used by the markdown export.
    pub const fn marker(self) -> &'static str {
        match self {
            Self::High => "🔴",
            Self::Medium => "🟡",
            Self::Low => "🟢",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: String,
    pub priority: AlertPriority,
}

/// One scheme that cleared both eligibility gates, with its explanation trail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub scheme: Arc<Scheme>,
    pub eligibility_score: u8,
    pub reasons: Vec<String>,
    pub alerts: Vec<Alert>,
}

/// Ranked output of a single recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationReport {
    pub generated_at: DateTime<Utc>,
    pub user_profile: UserProfile,
    pub total_schemes_analyzed: usize,
    pub eligible_schemes_count: usize,
    pub recommendations: Vec<RecommendationResult>,
    pub summary: String,
}

impl RecommendationReport {
    pub fn high_eligibility_count(&self) -> usize {
        self.recommendations
            .iter()
            .filter(|result| result.eligibility_score >= super::HIGH_ELIGIBILITY_SCORE)
            .count()
    }
}
