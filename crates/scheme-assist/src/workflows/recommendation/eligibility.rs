use super::domain::UserProfile;
use crate::workflows::catalog::Scheme;

/// Activity and geography gate applied before any scoring. Evaluated on its own, not through the
/// score's state dimension.
pub fn passes_geography_gate(scheme: &Scheme, profile: &UserProfile) -> bool {
    if !scheme.is_active {
        return false;
    }

    scheme.is_nationwide() || scheme.state == profile.state || profile.wants_nationwide()
}

pub fn clears_threshold(score: u8, minimum_score: u8) -> bool {
    score >= minimum_score
}
