use super::domain::UserProfile;
use crate::workflows::catalog::Scheme;

const RUPEES_PER_LAKH: f64 = 100_000.0;

/// Human-readable explanation trail for a recommended scheme, headline first.
pub fn explain(scheme: &Scheme, profile: &UserProfile, score: u8) -> Vec<String> {
    let mut reasons = Vec::with_capacity(6);

    if let Some(headline) = headline(score) {
        reasons.push(headline.to_string());
    }

    if scheme.covers_age(profile.age) {
        reasons.push(format!(
            "Your age ({}) meets the eligibility criteria ({}-{} years)",
            profile.age, scheme.min_age, scheme.max_age
        ));
    }

    if scheme.covers_income(profile.annual_income) {
        reasons.push(format!(
            "Your annual income (₹{}L) is within the limit (up to ₹{}L)",
            lakhs(profile.annual_income),
            lakhs(scheme.max_income)
        ));
    }

    if scheme.is_nationwide() {
        reasons.push("This Central Government scheme is available across all states".to_string());
    } else if scheme.state == profile.state {
        reasons.push(format!(
            "This scheme is specifically designed for residents of {}",
            scheme.state
        ));
    }

    if scheme.category == profile.category {
        reasons.push(format!(
            "Scheme category ({}) matches your area of interest",
            scheme.category
        ));
    }

    reasons.push(format!("Target beneficiaries: {}", scheme.target_group));
    reasons
}

fn headline(score: u8) -> Option<&'static str> {
    match score {
        90..=u8::MAX => Some("⭐ Perfect Match: You meet all eligibility criteria"),
        75..=89 => Some("✅ Highly Eligible: You meet most eligibility criteria"),
        60..=74 => Some("📋 Eligible: You meet basic eligibility requirements"),
        _ => None,
    }
}

fn lakhs(amount: u64) -> String {
    // x.x5 lakh is exact in binary only for odd multiples of 25k; those ties round up.
    if amount % 50_000 == 25_000 {
        let tenths = (amount + 5_000) / 10_000;
        return format!("{}.{}", tenths / 10, tenths % 10);
    }
    format!("{:.1}", amount as f64 / RUPEES_PER_LAKH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::catalog::{SchemeCategory, SchemeLevel, ALL_STATES};
    use chrono::NaiveDate;

    fn scheme() -> Scheme {
        Scheme {
            scheme_id: "PMAY-G".to_string(),
            scheme_name: "Pradhan Mantri Awas Yojana - Gramin".to_string(),
            level: SchemeLevel::Central,
            state: ALL_STATES.to_string(),
            category: SchemeCategory::Housing,
            min_age: 18,
            max_age: 70,
            min_income: 0,
            max_income: 300_000,
            target_group: "Rural households without pucca houses".to_string(),
            benefits: "Construction assistance".to_string(),
            is_active: true,
            last_updated: NaiveDate::from_ymd_opt(2025, 2, 10).expect("valid date"),
            deadline: None,
            is_new: false,
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            state: "Odisha".to_string(),
            age: 35,
            annual_income: 150_000,
            category: SchemeCategory::Housing,
            gender: None,
        }
    }

    #[test]
    fn perfect_match_lists_every_reason_in_order() {
        let reasons = explain(&scheme(), &profile(), 95);

        assert_eq!(
            reasons,
            vec![
                "⭐ Perfect Match: You meet all eligibility criteria".to_string(),
                "Your age (35) meets the eligibility criteria (18-70 years)".to_string(),
                "Your annual income (₹1.5L) is within the limit (up to ₹3.0L)".to_string(),
                "This Central Government scheme is available across all states".to_string(),
                "Scheme category (Housing) matches your area of interest".to_string(),
                "Target beneficiaries: Rural households without pucca houses".to_string(),
            ]
        );
    }

    #[test]
    fn half_lakh_incomes_round_up_in_the_income_reason() {
        let mut capped = scheme();
        capped.max_income = 250_000;
        let mut applicant = profile();
        applicant.annual_income = 125_000;

        let reasons = explain(&capped, &applicant, 95);

        assert_eq!(
            reasons[2],
            "Your annual income (₹1.3L) is within the limit (up to ₹2.5L)"
        );
    }

    #[test]
    fn lakh_figures_match_one_decimal_display() {
        assert_eq!(lakhs(25_000), "0.3");
        assert_eq!(lakhs(75_000), "0.8");
        assert_eq!(lakhs(125_000), "1.3");
        assert_eq!(lakhs(225_000), "2.3");
        assert_eq!(lakhs(150_000), "1.5");
        assert_eq!(lakhs(0), "0.0");
        // 0.35 and 0.45 sit just below the tie as doubles.
        assert_eq!(lakhs(35_000), "0.3");
        assert_eq!(lakhs(45_000), "0.5");
        assert_eq!(lakhs(1_234_567), "12.3");
    }

    #[test]
    fn headline_follows_score_bands() {
        assert_eq!(headline(90), Some("⭐ Perfect Match: You meet all eligibility criteria"));
        assert_eq!(
            headline(89),
            Some("✅ Highly Eligible: You meet most eligibility criteria")
        );
        assert_eq!(
            headline(75),
            Some("✅ Highly Eligible: You meet most eligibility criteria")
        );
        assert_eq!(
            headline(60),
            Some("📋 Eligible: You meet basic eligibility requirements")
        );
        assert_eq!(headline(59), None);
    }

    #[test]
    fn regional_scheme_names_the_state_and_skips_missing_criteria() {
        let mut regional = scheme();
        regional.level = SchemeLevel::State;
        regional.state = "Odisha".to_string();
        regional.category = SchemeCategory::SocialSecurity;
        let mut applicant = profile();
        applicant.age = 75;

        let reasons = explain(&regional, &applicant, 55);

        assert_eq!(
            reasons,
            vec![
                "Your annual income (₹1.5L) is within the limit (up to ₹3.0L)".to_string(),
                "This scheme is specifically designed for residents of Odisha".to_string(),
                "Target beneficiaries: Rural households without pucca houses".to_string(),
            ]
        );
    }

    #[test]
    fn target_group_is_always_last() {
        let mut applicant = profile();
        applicant.state = "All India".to_string();
        let mut regional = scheme();
        regional.state = "Assam".to_string();

        let reasons = explain(&regional, &applicant, 70);

        assert_eq!(
            reasons.last().map(String::as_str),
            Some("Target beneficiaries: Rural households without pucca houses")
        );
        assert!(!reasons
            .iter()
            .any(|reason| reason.contains("specifically designed")));
    }
}
