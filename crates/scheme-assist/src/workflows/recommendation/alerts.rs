use super::domain::{Alert, AlertKind, AlertPriority};
use crate::workflows::catalog::Scheme;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

pub const PERFECT_MATCH_SCORE: u8 = 90;

const MILLIS_PER_DAY: i64 = 86_400_000;
const URGENT_WINDOW_DAYS: i64 = 7;
const UPCOMING_WINDOW_DAYS: i64 = 30;
const HORIZON_DAYS: i64 = 90;

/// Whole days until `deadline`, rounded up. The deadline is read as midnight UTC of its date, so
/// any positive remainder of a day counts as a full day.
pub fn days_until(deadline: NaiveDate, now: DateTime<Utc>) -> i64 {
    let due = deadline.and_time(NaiveTime::MIN).and_utc();
    let millis = (due - now).num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) > 0 {
        days + 1
    } else {
        days
    }
}

/// Alerts for a recommended scheme: score, then deadline, then novelty.
pub fn alerts_for(scheme: &Scheme, score: u8, now: DateTime<Utc>) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if score >= PERFECT_MATCH_SCORE {
        alerts.push(Alert {
            kind: AlertKind::PerfectMatch,
            message: "Perfect Match! You meet all eligibility criteria for this scheme.".to_string(),
            priority: AlertPriority::High,
        });
    } else if score >= super::HIGH_ELIGIBILITY_SCORE {
        alerts.push(Alert {
            kind: AlertKind::HighEligibility,
            message: "You are highly eligible for this scheme. Apply soon!".to_string(),
            priority: AlertPriority::High,
        });
    }

    if let Some(deadline) = scheme.deadline {
        if let Some(alert) = deadline_alert(deadline, now) {
            alerts.push(alert);
        }
    }

    if scheme.is_new {
        alerts.push(Alert {
            kind: AlertKind::NewScheme,
            message: "This is a newly launched scheme - be among the first applicants!".to_string(),
            priority: AlertPriority::Medium,
        });
    }

    alerts
}

fn deadline_alert(deadline: NaiveDate, now: DateTime<Utc>) -> Option<Alert> {
    let days = days_until(deadline, now);

    let (message, priority) = match days {
        d if d <= 0 => return None,
        d if d <= URGENT_WINDOW_DAYS => (
            format!("Application deadline in {d} days ({deadline})"),
            AlertPriority::High,
        ),
        d if d <= UPCOMING_WINDOW_DAYS => (
            format!("Application deadline in {d} days ({deadline})"),
            AlertPriority::Medium,
        ),
        d if d <= HORIZON_DAYS => (
            format!("Application deadline: {deadline}"),
            AlertPriority::Low,
        ),
        _ => return None,
    };

    Some(Alert {
        kind: AlertKind::DeadlineApproaching,
        message,
        priority,
    })
}
