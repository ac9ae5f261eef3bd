use crate::infra::{load_catalog, parse_date, parse_gender};
use chrono::NaiveDate;
use clap::Args;
use scheme_assist::config::AppConfig;
use scheme_assist::error::AppError;
use scheme_assist::workflows::catalog::{CatalogStats, SchemeCatalog};
use scheme_assist::workflows::recommendation::{
    format_rupees, render_markdown, score_breakdown, Clock, FixedClock, Gender, ProfileDraft,
    RecommendationEngine, RecommendationReport, SystemClock,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Applicant's state, or "All India" for nationwide results
    #[arg(long)]
    pub(crate) state: String,
    /// Applicant's age in years (0-120)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) age: i64,
    /// Annual household income in rupees
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) income: i64,
    /// Category of interest, e.g. "Agriculture" or "Women Welfare"
    #[arg(long)]
    pub(crate) category: String,
    /// Optional gender (male, female, other)
    #[arg(long, value_parser = parse_gender)]
    pub(crate) gender: Option<Gender>,
    /// Scheme catalog (JSON or CSV) to score against
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the shareable markdown export instead of the text summary
    #[arg(long)]
    pub(crate) markdown: bool,
    /// Evaluate deadlines as of this date (YYYY-MM-DD) instead of now
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct StatsArgs {
    /// Scheme catalog (JSON or CSV) to summarize
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        state,
        age,
        income,
        category,
        gender,
        catalog,
        markdown,
        today,
    } = args;

    let config = AppConfig::load()?;
    let catalog = load_catalog(catalog, &config)?;

    let profile = ProfileDraft {
        state: Some(state),
        age: Some(age),
        annual_income: Some(income),
        category: Some(category),
        gender,
    }
    .validate()?;

    let clock: Box<dyn Clock> = match today {
        Some(date) => Box::new(FixedClock::at_midnight(date)),
        None => Box::new(SystemClock),
    };
    let report =
        RecommendationEngine::default().generate_report(&catalog, &profile, clock.as_ref());

    if markdown {
        println!("{}", render_markdown(&report));
    } else {
        render_text_report(&report);
    }

    Ok(())
}

pub(crate) fn run_stats(args: StatsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = load_catalog(args.catalog, &config)?;
    render_stats(&catalog, &catalog.stats());
    Ok(())
}

fn render_text_report(report: &RecommendationReport) {
    let profile = &report.user_profile;
    println!("SchemeAssist recommendation report");
    println!(
        "Generated {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "Profile: {} | age {} | income ₹{} | interest {}",
        profile.state,
        profile.age,
        format_rupees(profile.annual_income),
        profile.category
    );
    println!(
        "Analyzed {} active schemes -> {} eligible",
        report.total_schemes_analyzed, report.eligible_schemes_count
    );
    println!("{}", report.summary);

    for (index, result) in report.recommendations.iter().enumerate() {
        let scheme = &result.scheme;
        println!(
            "\n{}. {} [{}] - {}%",
            index + 1,
            scheme.scheme_name,
            scheme.scheme_id,
            result.eligibility_score
        );
        println!(
            "   {} | {} | {}",
            scheme.level, scheme.category, scheme.benefits
        );

        let breakdown = score_breakdown(scheme, profile);
        println!("   Score components:");
        for component in &breakdown.components {
            println!(
                "     - {}: {:.1} ({})",
                component.dimension.label(),
                component.points,
                component.notes
            );
        }

        println!("   Reasons:");
        for reason in &result.reasons {
            println!("     - {reason}");
        }

        if !result.alerts.is_empty() {
            println!("   Alerts:");
            for alert in &result.alerts {
                println!("     - [{}] {}", alert.priority.label(), alert.message);
            }
        }
    }
}

fn render_stats(catalog: &SchemeCatalog, stats: &CatalogStats) {
    println!("Scheme catalog statistics");
    println!(
        "- {} active schemes ({} central / {} state) out of {} listed",
        stats.total_schemes,
        stats.level_counts.central,
        stats.level_counts.state,
        catalog.len()
    );
    println!("- {} newly launched", stats.new_schemes);
    println!("- {} with application deadlines", stats.schemes_with_deadlines);
    println!("Schemes by category:");
    for (category, count) in stats.top_categories(stats.category_counts.len()) {
        println!("  - {category}: {count}");
    }
    println!("States with dedicated schemes: {}", catalog.states().join(", "));
}
