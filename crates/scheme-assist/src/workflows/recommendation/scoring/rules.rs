use super::super::domain::UserProfile;
use crate::workflows::catalog::{Scheme, SchemeLevel};

pub(crate) const AGE_WEIGHT: f64 = 25.0;
pub(crate) const AGE_CENTRALITY_BONUS: f64 = 5.0;
pub(crate) const INCOME_WEIGHT: f64 = 30.0;
pub(crate) const INCOME_NEED_BONUS: f64 = 10.0;
pub(crate) const STATE_WEIGHT: f64 = 20.0;
pub(crate) const STATE_SPECIFIC_BONUS: f64 = 5.0;
pub(crate) const CATEGORY_WEIGHT: f64 = 25.0;
pub(crate) const RELATED_CATEGORY_CREDIT: f64 = 10.0;

/// Full credit inside the age band, plus a bonus peaking at the middle of the band.
pub(crate) fn age_points(scheme: &Scheme, profile: &UserProfile) -> f64 {
    if !scheme.covers_age(profile.age) {
        return 0.0;
    }

    let width = f64::from(scheme.max_age - scheme.min_age);
    if width == 0.0 {
        return AGE_WEIGHT;
    }

    let position = f64::from(profile.age - scheme.min_age);
    let centrality = 1.0 - ((position / width) - 0.5).abs() * 2.0;
    AGE_WEIGHT + centrality * AGE_CENTRALITY_BONUS
}

/// Full credit inside the income band, plus a bonus that grows as income approaches the floor.
pub(crate) fn income_points(scheme: &Scheme, profile: &UserProfile) -> f64 {
    if !scheme.covers_income(profile.annual_income) {
        return 0.0;
    }

    let width = (scheme.max_income - scheme.min_income) as f64;
    if width == 0.0 {
        return INCOME_WEIGHT;
    }

    let headroom = (scheme.max_income - profile.annual_income) as f64 / width;
    INCOME_WEIGHT + headroom.clamp(0.0, 1.0) * INCOME_NEED_BONUS
}

pub(crate) fn state_applies(scheme: &Scheme, profile: &UserProfile) -> bool {
    scheme.is_nationwide() || scheme.state == profile.state || profile.wants_nationwide()
}

pub(crate) fn state_points(scheme: &Scheme, profile: &UserProfile) -> f64 {
    if !state_applies(scheme, profile) {
        return 0.0;
    }

    if scheme.level == SchemeLevel::State && scheme.state == profile.state {
        STATE_WEIGHT + STATE_SPECIFIC_BONUS
    } else {
        STATE_WEIGHT
    }
}

pub(crate) fn category_points(scheme: &Scheme, profile: &UserProfile) -> f64 {
    if scheme.category == profile.category {
        CATEGORY_WEIGHT
    } else if profile.category.is_related_to(scheme.category) {
        RELATED_CATEGORY_CREDIT
    } else {
        0.0
    }
}
