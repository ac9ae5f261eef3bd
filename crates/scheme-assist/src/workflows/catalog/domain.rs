use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scheme `state` sentinel marking a programme that applies in every state.
pub const ALL_STATES: &str = "All";

/// Profile `state` sentinel used by applicants who want nationwide results.
pub const NATIONWIDE: &str = "All India";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SchemeLevel {
    Central,
    State,
}

impl SchemeLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Central => "Central",
            Self::State => "State",
        }
    }
}

impl fmt::Display for SchemeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Closed set of welfare categories shared by schemes and applicant profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SchemeCategory {
    Agriculture,
    Education,
    Health,
    Housing,
    Business,
    #[serde(rename = "Women Welfare")]
    WomenWelfare,
    #[serde(rename = "Senior Citizen")]
    SeniorCitizen,
    Disability,
    #[serde(rename = "Skill Development")]
    SkillDevelopment,
    #[serde(rename = "Social Security")]
    SocialSecurity,
    #[serde(rename = "Food Security")]
    FoodSecurity,
}

impl SchemeCategory {
    pub const fn ordered() -> [Self; 11] {
        [
            Self::Agriculture,
            Self::Education,
            Self::Health,
            Self::Housing,
            Self::Business,
            Self::WomenWelfare,
            Self::SeniorCitizen,
            Self::Disability,
            Self::SkillDevelopment,
            Self::SocialSecurity,
            Self::FoodSecurity,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Agriculture => "Agriculture",
            Self::Education => "Education",
            Self::Health => "Health",
            Self::Housing => "Housing",
            Self::Business => "Business",
            Self::WomenWelfare => "Women Welfare",
            Self::SeniorCitizen => "Senior Citizen",
            Self::Disability => "Disability",
            Self::SkillDevelopment => "Skill Development",
            Self::SocialSecurity => "Social Security",
            Self::FoodSecurity => "Food Security",
        }
    }

    /// Categories that earn partial credit when an applicant interested in `self` looks at a
    /// scheme from that category. The relation is not symmetric.
    pub const fn related(self) -> &'static [Self] {
        match self {
            Self::Agriculture => &[Self::Business, Self::SkillDevelopment],
            Self::Education => &[Self::SkillDevelopment, Self::WomenWelfare],
            Self::Health => &[Self::WomenWelfare, Self::SeniorCitizen, Self::Disability],
            Self::Housing => &[Self::SocialSecurity],
            Self::Business => &[Self::Agriculture, Self::SkillDevelopment],
            Self::WomenWelfare => &[Self::Education, Self::Health, Self::Housing],
            Self::SeniorCitizen => &[Self::Health, Self::SocialSecurity],
            Self::Disability => &[Self::Health, Self::Education],
            Self::SkillDevelopment => &[Self::Education, Self::Business],
            Self::SocialSecurity => &[Self::SeniorCitizen, Self::Housing],
            Self::FoodSecurity => &[Self::Health, Self::SocialSecurity],
        }
    }

    pub fn is_related_to(self, scheme_category: Self) -> bool {
        self.related().contains(&scheme_category)
    }
}

impl fmt::Display for SchemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scheme category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for SchemeCategory {
    type Err = UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(trimmed.to_string()))
    }
}

/// A welfare programme record with its eligibility bounds and publication metadata.
///
/// Age and income bounds are inclusive. Catalog loading guarantees `min <= max` for both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme {
    pub scheme_id: String,
    pub scheme_name: String,
    pub level: SchemeLevel,
    pub state: String,
    pub category: SchemeCategory,
    pub min_age: u8,
    pub max_age: u8,
    pub min_income: u64,
    pub max_income: u64,
    pub target_group: String,
    pub benefits: String,
    pub is_active: bool,
    pub last_updated: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub is_new: bool,
}

impl Scheme {
    pub fn covers_age(&self, age: u8) -> bool {
        (self.min_age..=self.max_age).contains(&age)
    }

    pub fn covers_income(&self, annual_income: u64) -> bool {
        (self.min_income..=self.max_income).contains(&annual_income)
    }

    pub fn is_nationwide(&self) -> bool {
        self.state == ALL_STATES
    }
}
