use super::super::domain::RecommendationResult;
use super::super::HIGH_ELIGIBILITY_SCORE;

/// One-paragraph overview sized to how many schemes matched.
pub fn summarize(recommendations: &[RecommendationResult]) -> String {
    let count = recommendations.len();

    let mut summary = match count {
        0 => {
            "No schemes match your current profile. Try adjusting your criteria or explore different categories."
                .to_string()
        }
        1..=5 => format!(
            "Found {count} scheme(s) matching your profile. Review each recommendation carefully."
        ),
        6..=15 => format!(
            "Great news! You are eligible for {count} government schemes. Top recommendations are shown first."
        ),
        _ => format!(
            "Excellent! You are eligible for {count} schemes across multiple categories. Focus on high-scoring schemes first."
        ),
    };

    let high = recommendations
        .iter()
        .filter(|result| result.eligibility_score >= HIGH_ELIGIBILITY_SCORE)
        .count();
    if high > 0 {
        summary.push_str(&format!(
            " {high} scheme(s) show high eligibility (80%+)."
        ));
    }

    summary
}
