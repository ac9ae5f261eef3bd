use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::catalog::{
    Scheme, SchemeCatalog, SchemeCategory, SchemeLevel, ALL_STATES, NATIONWIDE,
};
use crate::workflows::recommendation::{
    recommendation_router, FixedClock, ProfileDraft, RecommendationEngine, RecommendationService,
    UserProfile,
};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

pub(super) fn clock() -> FixedClock {
    FixedClock::at_midnight(today())
}

pub(super) fn central(id: &str, category: SchemeCategory) -> Scheme {
    Scheme {
        scheme_id: id.to_string(),
        scheme_name: format!("Central scheme {id}"),
        level: SchemeLevel::Central,
        state: ALL_STATES.to_string(),
        category,
        min_age: 18,
        max_age: 80,
        min_income: 0,
        max_income: 200_000,
        target_group: "Low-income households".to_string(),
        benefits: "Direct benefit transfer".to_string(),
        is_active: true,
        last_updated: NaiveDate::from_ymd_opt(2025, 1, 10).expect("valid date"),
        deadline: None,
        is_new: false,
    }
}

pub(super) fn regional(id: &str, state: &str, category: SchemeCategory) -> Scheme {
    Scheme {
        scheme_name: format!("{state} scheme {id}"),
        level: SchemeLevel::State,
        state: state.to_string(),
        ..central(id, category)
    }
}

/// Mixed catalog: nationwide, regional, inactive, and out-of-band schemes.
pub(super) fn catalog() -> SchemeCatalog {
    let mut pm_kisan = central("CEN-AGR-001", SchemeCategory::Agriculture);
    pm_kisan.deadline = NaiveDate::from_ymd_opt(2025, 6, 6);

    let mut mudra = central("CEN-BUS-001", SchemeCategory::Business);
    mudra.is_new = true;

    let mut pension = central("CEN-SSC-001", SchemeCategory::SocialSecurity);
    pension.min_age = 60;
    pension.max_age = 120;

    let raitha = regional("STA-KA-001", "Karnataka", SchemeCategory::Agriculture);
    let kalia = regional("STA-OD-001", "Odisha", SchemeCategory::Agriculture);

    let mut retired = central("CEN-AGR-002", SchemeCategory::Agriculture);
    retired.is_active = false;

    let skills = central("CEN-SKL-001", SchemeCategory::SkillDevelopment);

    SchemeCatalog::new(vec![
        pm_kisan, mudra, pension, raitha, kalia, retired, skills,
    ])
    .expect("fixture catalog is valid")
}

pub(super) fn farmer(state: &str) -> UserProfile {
    UserProfile {
        state: state.to_string(),
        age: 40,
        annual_income: 150_000,
        category: SchemeCategory::Agriculture,
        gender: None,
    }
}

pub(super) fn nationwide_farmer() -> UserProfile {
    farmer(NATIONWIDE)
}

pub(super) fn farmer_draft() -> ProfileDraft {
    ProfileDraft {
        state: Some("Karnataka".to_string()),
        age: Some(40),
        annual_income: Some(150_000),
        category: Some("Agriculture".to_string()),
        gender: None,
    }
}

pub(super) fn engine() -> RecommendationEngine {
    RecommendationEngine::default()
}

pub(super) fn build_service() -> RecommendationService<FixedClock> {
    RecommendationService::new(Arc::new(catalog()), clock())
}

pub(super) fn router() -> axum::Router {
    recommendation_router(Arc::new(build_service()))
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = read_body(response).await;
    serde_json::from_slice(&body).expect("json payload")
}
