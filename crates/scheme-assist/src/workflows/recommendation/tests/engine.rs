use super::common::*;
use crate::workflows::catalog::{SchemeCatalog, SchemeCategory};
use crate::workflows::recommendation::{
    AlertKind, AlertPriority, Clock, RecommendationEngine, RecommendationPolicy,
};

fn ids(results: &[crate::workflows::recommendation::RecommendationResult]) -> Vec<&str> {
    results
        .iter()
        .map(|result| result.scheme.scheme_id.as_str())
        .collect()
}

#[test]
fn ranks_by_score_and_keeps_catalog_order_on_ties() {
    let results = engine().recommend(&catalog(), &farmer("Karnataka"), clock().now());

    assert_eq!(
        ids(&results),
        vec![
            "CEN-AGR-001",
            "STA-KA-001",
            "CEN-BUS-001",
            "CEN-SKL-001",
            "CEN-SSC-001",
        ]
    );
    let scores: Vec<u8> = results.iter().map(|result| result.eligibility_score).collect();
    assert_eq!(scores, vec![100, 100, 91, 91, 53]);
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn excludes_inactive_and_out_of_region_schemes() {
    let results = engine().recommend(&catalog(), &farmer("Punjab"), clock().now());

    assert!(results.iter().all(|result| result.scheme.is_active));
    assert!(!ids(&results).contains(&"CEN-AGR-002"));
    assert!(!ids(&results).contains(&"STA-KA-001"));
    assert!(!ids(&results).contains(&"STA-OD-001"));
    assert_eq!(results.len(), 4);
}

#[test]
fn nationwide_profile_sees_every_regional_scheme_without_bonus() {
    let results = engine().recommend(&catalog(), &nationwide_farmer(), clock().now());

    assert_eq!(
        ids(&results),
        vec![
            "CEN-AGR-001",
            "STA-KA-001",
            "STA-OD-001",
            "CEN-BUS-001",
            "CEN-SKL-001",
            "CEN-SSC-001",
        ]
    );
    let odisha = results
        .iter()
        .find(|result| result.scheme.scheme_id == "STA-OD-001")
        .expect("odisha scheme present");
    assert!(!odisha
        .reasons
        .iter()
        .any(|reason| reason.contains("specifically designed")));
}

#[test]
fn every_result_clears_the_threshold() {
    for category in SchemeCategory::ordered() {
        let mut profile = nationwide_farmer();
        profile.category = category;

        let results = engine().recommend(&catalog(), &profile, clock().now());

        assert!(results.iter().all(|result| result.eligibility_score >= 50));
        assert!(results.iter().all(|result| !result.reasons.is_empty()));
    }
}

#[test]
fn stricter_policy_drops_marginal_schemes() {
    let strict = RecommendationEngine::new(RecommendationPolicy { minimum_score: 90 });

    let results = strict.recommend(&catalog(), &farmer("Karnataka"), clock().now());

    assert_eq!(strict.policy().minimum_score, 90);
    assert!(!ids(&results).contains(&"CEN-SSC-001"));
    assert_eq!(results.len(), 4);
}

#[test]
fn report_counts_and_summary_line_up() {
    let report = engine().generate_report(&catalog(), &farmer("Karnataka"), &clock());

    assert_eq!(report.generated_at, clock().now());
    assert_eq!(report.total_schemes_analyzed, 6);
    assert_eq!(report.eligible_schemes_count, report.recommendations.len());
    assert!(report.eligible_schemes_count <= report.total_schemes_analyzed);
    assert_eq!(report.high_eligibility_count(), 4);
    assert_eq!(
        report.summary,
        "Found 5 scheme(s) matching your profile. Review each recommendation carefully. 4 scheme(s) show high eligibility (80%+)."
    );
}

#[test]
fn report_generation_is_idempotent_under_fixed_clock() {
    let catalog = catalog();
    let profile = farmer("Karnataka");

    let first = engine().generate_report(&catalog, &profile, &clock());
    let second = engine().generate_report(&catalog, &profile, &clock());

    assert_eq!(first, second);
}

#[test]
fn top_recommendation_carries_deadline_and_match_alerts() {
    let results = engine().recommend(&catalog(), &farmer("Karnataka"), clock().now());
    let pm_kisan = &results[0];

    let alerts: Vec<(AlertKind, AlertPriority)> = pm_kisan
        .alerts
        .iter()
        .map(|alert| (alert.kind, alert.priority))
        .collect();
    assert_eq!(
        alerts,
        vec![
            (AlertKind::PerfectMatch, AlertPriority::High),
            (AlertKind::DeadlineApproaching, AlertPriority::High),
        ]
    );
    assert_eq!(
        pm_kisan.alerts[1].message,
        "Application deadline in 5 days (2025-06-06)"
    );
    assert_eq!(
        pm_kisan.reasons.first().map(String::as_str),
        Some("⭐ Perfect Match: You meet all eligibility criteria")
    );
}

#[test]
fn marginal_match_has_no_headline_or_alerts() {
    let results = engine().recommend(&catalog(), &farmer("Karnataka"), clock().now());
    let pension = results
        .iter()
        .find(|result| result.scheme.scheme_id == "CEN-SSC-001")
        .expect("pension present");

    assert!(pension.alerts.is_empty());
    assert_eq!(
        pension.reasons,
        vec![
            "Your annual income (₹1.5L) is within the limit (up to ₹2.0L)".to_string(),
            "This Central Government scheme is available across all states".to_string(),
            "Target beneficiaries: Low-income households".to_string(),
        ]
    );
}

#[test]
fn empty_catalog_yields_empty_report() {
    let report = engine().generate_report(
        &SchemeCatalog::default(),
        &nationwide_farmer(),
        &clock(),
    );

    assert_eq!(report.total_schemes_analyzed, 0);
    assert!(report.recommendations.is_empty());
    assert!(report.summary.starts_with("No schemes match your current profile."));
}
