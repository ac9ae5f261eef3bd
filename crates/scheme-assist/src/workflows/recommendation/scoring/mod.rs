//! Four-dimension eligibility score.
//!
//! The base weights (age 25, income 30, state 20, category 25) add up to 100, so the raw sum is
//! already a percentage. Bonuses can push the raw sum past 100; the final score is capped and
//! rounded once, after all contributions are added.

mod rules;

use super::domain::UserProfile;
use crate::workflows::catalog::Scheme;
use serde::Serialize;

pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreDimension {
    Age,
    Income,
    State,
    Category,
}

impl ScoreDimension {
    pub const fn ordered() -> [Self; 4] {
        [Self::Age, Self::Income, Self::State, Self::Category]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Income => "Income",
            Self::State => "State",
            Self::Category => "Category",
        }
    }

    fn points(self, scheme: &Scheme, profile: &UserProfile) -> f64 {
        match self {
            Self::Age => rules::age_points(scheme, profile),
            Self::Income => rules::income_points(scheme, profile),
            Self::State => rules::state_points(scheme, profile),
            Self::Category => rules::category_points(scheme, profile),
        }
    }
}

/// Discrete contribution to a score, kept for audits and explanations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub dimension: ScoreDimension,
    pub points: f64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub components: Vec<ScoreComponent>,
    pub raw_total: f64,
    pub score: u8,
}

/// Eligibility score in `0..=100` for one scheme/profile pair.
pub fn eligibility_score(scheme: &Scheme, profile: &UserProfile) -> u8 {
    let raw_total: f64 = ScoreDimension::ordered()
        .into_iter()
        .map(|dimension| dimension.points(scheme, profile))
        .sum();
    finalize(raw_total)
}

pub fn score_breakdown(scheme: &Scheme, profile: &UserProfile) -> ScoreBreakdown {
    let components: Vec<ScoreComponent> = ScoreDimension::ordered()
        .into_iter()
        .map(|dimension| {
            let points = dimension.points(scheme, profile);
            ScoreComponent {
                dimension,
                points,
                notes: describe(dimension, points, scheme, profile),
            }
        })
        .collect();

    let raw_total = components.iter().map(|component| component.points).sum();

    ScoreBreakdown {
        components,
        raw_total,
        score: finalize(raw_total),
    }
}

fn finalize(raw_total: f64) -> u8 {
    raw_total.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
}

fn describe(dimension: ScoreDimension, points: f64, scheme: &Scheme, profile: &UserProfile) -> String {
    match dimension {
        ScoreDimension::Age if points > 0.0 => format!(
            "age {} within {}-{}",
            profile.age, scheme.min_age, scheme.max_age
        ),
        ScoreDimension::Age => format!(
            "age {} outside {}-{}",
            profile.age, scheme.min_age, scheme.max_age
        ),
        ScoreDimension::Income if points > 0.0 => format!(
            "income {} within {}-{}",
            profile.annual_income, scheme.min_income, scheme.max_income
        ),
        ScoreDimension::Income => format!(
            "income {} outside {}-{}",
            profile.annual_income, scheme.min_income, scheme.max_income
        ),
        ScoreDimension::State if points > rules::STATE_WEIGHT => {
            format!("state scheme for {}", scheme.state)
        }
        ScoreDimension::State if points > 0.0 => {
            format!("scheme region '{}' covers '{}'", scheme.state, profile.state)
        }
        ScoreDimension::State => {
            format!("scheme region '{}' excludes '{}'", scheme.state, profile.state)
        }
        ScoreDimension::Category if points >= rules::CATEGORY_WEIGHT => {
            format!("category {} matches", scheme.category)
        }
        ScoreDimension::Category if points > 0.0 => format!(
            "category {} related to {}",
            scheme.category, profile.category
        ),
        ScoreDimension::Category => format!(
            "category {} unrelated to {}",
            scheme.category, profile.category
        ),
    }
}
