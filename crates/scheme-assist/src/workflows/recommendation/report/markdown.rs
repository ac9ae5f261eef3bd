use super::super::domain::{RecommendationReport, RecommendationResult};

/// Sections beyond this many recommendations are left out of the export.
pub const MARKDOWN_RECOMMENDATION_LIMIT: usize = 20;

const DISCLAIMER: [&str; 4] = [
    "This recommendation is generated by an AI system based on the provided data and eligibility criteria.",
    "Actual eligibility may vary based on additional documentation and verification requirements.",
    "Please visit the official scheme portals or nearest government office for final confirmation.",
    "The dataset is updated periodically and may not reflect the most recent changes.",
];

/// Render a report as a shareable markdown document.
pub fn render_markdown(report: &RecommendationReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("# SchemeAssist AI - Recommendation Report".to_string());
    lines.push(String::new());
    lines.push(format!(
        "**Generated:** {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());

    let profile = &report.user_profile;
    lines.push("## User Profile Summary".to_string());
    lines.push(String::new());
    lines.push("| Field | Value |".to_string());
    lines.push("|-------|-------|".to_string());
    lines.push(format!("| State | {} |", profile.state));
    lines.push(format!("| Age | {} years |", profile.age));
    lines.push(format!(
        "| Annual Income | ₹{} |",
        format_rupees(profile.annual_income)
    ));
    lines.push(format!("| Category of Interest | {} |", profile.category));
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());

    lines.push("## Analysis Summary".to_string());
    lines.push(String::new());
    lines.push(format!(
        "- **Total Schemes Analyzed:** {}",
        report.total_schemes_analyzed
    ));
    lines.push(format!(
        "- **Eligible Schemes Found:** {}",
        report.eligible_schemes_count
    ));
    lines.push(String::new());
    lines.push(format!("> {}", report.summary));
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());

    lines.push("## Recommended Schemes".to_string());
    lines.push(String::new());
    for (index, result) in report
        .recommendations
        .iter()
        .take(MARKDOWN_RECOMMENDATION_LIMIT)
        .enumerate()
    {
        push_recommendation(&mut lines, index + 1, result);
    }

    lines.push("## Disclaimer".to_string());
    lines.push(String::new());
    lines.extend(DISCLAIMER.iter().map(|line| format!("> {line}")));
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());
    lines.push("*Powered by SchemeAssist AI | Civora Nexus AID105 Project*".to_string());

    lines.join("\n")
}

fn push_recommendation(lines: &mut Vec<String>, position: usize, result: &RecommendationResult) {
    let scheme = &result.scheme;

    lines.push(format!("### {position}. {}", scheme.scheme_name));
    lines.push(String::new());
    lines.push(format!("**Eligibility Score:** {}%", result.eligibility_score));
    lines.push(String::new());
    lines.push("| Detail | Information |".to_string());
    lines.push("|--------|-------------|".to_string());
    lines.push(format!("| Scheme ID | {} |", scheme.scheme_id));
    lines.push(format!("| Level | {} |", scheme.level));
    lines.push(format!("| Category | {} |", scheme.category));
    lines.push(format!("| Target Group | {} |", scheme.target_group));
    lines.push(format!("| Benefits | {} |", scheme.benefits));
    lines.push(format!("| Last Updated | {} |", scheme.last_updated));
    if let Some(deadline) = scheme.deadline {
        lines.push(format!("| Deadline | {deadline} |"));
    }
    lines.push(String::new());

    lines.push("**Why You Are Eligible:**".to_string());
    lines.extend(result.reasons.iter().map(|reason| format!("- {reason}")));
    lines.push(String::new());

    if !result.alerts.is_empty() {
        lines.push("**Alerts:**".to_string());
        lines.extend(
            result
                .alerts
                .iter()
                .map(|alert| format!("- {} {}", alert.priority.marker(), alert.message)),
        );
        lines.push(String::new());
    }

    lines.push("---".to_string());
    lines.push(String::new());
}

/// Indian digit grouping: the last three digits, then pairs (`1,50,000`, `12,34,56,789`).
pub fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let lead = head.len() % 2;
    let mut groups: Vec<&str> = Vec::with_capacity(head.len() / 2 + 2);
    if lead == 1 {
        groups.push(&head[..1]);
    }
    // Decimal digits are ASCII, so byte offsets are char boundaries.
    groups.extend((lead..head.len()).step_by(2).map(|at| &head[at..at + 2]));
    groups.push(tail);
    groups.join(",")
}
