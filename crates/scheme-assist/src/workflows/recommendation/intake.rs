use super::domain::{Gender, UserProfile};
use crate::workflows::catalog::SchemeCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_AGE: i64 = 120;

/// Raw form input. Numbers are signed so out-of-range submissions survive deserialization and
/// can be reported field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default, alias = "annualIncome")]
    pub annual_income: Option<i64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    State,
    Age,
    AnnualIncome,
    Category,
}

impl ProfileField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::State => "state",
            Self::Age => "age",
            Self::AnnualIncome => "annual_income",
            Self::Category => "category",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    MissingField,
    OutOfRange,
    UnknownValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: ProfileField,
    pub kind: ValidationKind,
    pub message: String,
}

impl ValidationError {
    fn new(field: ProfileField, kind: ValidationKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}

/// Every problem found in a draft, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn for_field(&self, field: ProfileField) -> Option<&ValidationError> {
        self.errors.iter().find(|error| error.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details: Vec<String> = self
            .errors
            .iter()
            .map(|error| format!("{}: {}", error.field.label(), error.message))
            .collect();
        write!(f, "invalid profile ({})", details.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl ProfileDraft {
    pub fn validate(self) -> Result<UserProfile, ValidationErrors> {
        let mut errors = Vec::new();

        let state = match self.state.as_deref().map(str::trim) {
            Some(state) if !state.is_empty() => Some(state.to_string()),
            _ => {
                errors.push(ValidationError::new(
                    ProfileField::State,
                    ValidationKind::MissingField,
                    "Please select your state",
                ));
                None
            }
        };

        let age = match self.age {
            None => {
                errors.push(ValidationError::new(
                    ProfileField::Age,
                    ValidationKind::MissingField,
                    "Please enter your age",
                ));
                None
            }
            Some(age) => match u8::try_from(age) {
                Ok(age) if i64::from(age) <= MAX_AGE => Some(age),
                _ => {
                    errors.push(ValidationError::new(
                        ProfileField::Age,
                        ValidationKind::OutOfRange,
                        "Please enter a valid age (0-120)",
                    ));
                    None
                }
            },
        };

        let annual_income = match self.annual_income {
            None => {
                errors.push(ValidationError::new(
                    ProfileField::AnnualIncome,
                    ValidationKind::MissingField,
                    "Please enter your annual income",
                ));
                None
            }
            Some(income) => match u64::try_from(income) {
                Ok(income) => Some(income),
                Err(_) => {
                    errors.push(ValidationError::new(
                        ProfileField::AnnualIncome,
                        ValidationKind::OutOfRange,
                        "Income cannot be negative",
                    ));
                    None
                }
            },
        };

        let category = match self.category.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => match raw.parse::<SchemeCategory>() {
                Ok(category) => Some(category),
                Err(_) => {
                    errors.push(ValidationError::new(
                        ProfileField::Category,
                        ValidationKind::UnknownValue,
                        "Unknown category",
                    ));
                    None
                }
            },
            _ => {
                errors.push(ValidationError::new(
                    ProfileField::Category,
                    ValidationKind::MissingField,
                    "Please select a category",
                ));
                None
            }
        };

        match (state, age, annual_income, category) {
            (Some(state), Some(age), Some(annual_income), Some(category)) if errors.is_empty() => {
                Ok(UserProfile {
                    state,
                    age,
                    annual_income,
                    category,
                    gender: self.gender,
                })
            }
            _ => Err(ValidationErrors { errors }),
        }
    }
}
