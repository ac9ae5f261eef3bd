use super::domain::{Scheme, SchemeCategory, SchemeLevel};
use super::CatalogError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<Scheme>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut schemes = Vec::new();

    for record in csv_reader.deserialize::<SchemeRow>() {
        let row = record?;
        schemes.push(row.into_scheme()?);
    }

    Ok(schemes)
}

#[derive(Debug, Deserialize)]
struct SchemeRow {
    scheme_id: String,
    scheme_name: String,
    level: SchemeLevel,
    state: String,
    category: SchemeCategory,
    min_age: u8,
    max_age: u8,
    min_income: u64,
    max_income: u64,
    target_group: String,
    benefits: String,
    is_active: bool,
    last_updated: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    deadline: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    is_new: Option<String>,
}

impl SchemeRow {
    fn into_scheme(self) -> Result<Scheme, CatalogError> {
        let last_updated = parse_date(&self.scheme_id, "last_updated", &self.last_updated)?;
        let deadline = self
            .deadline
            .as_deref()
            .map(|raw| parse_date(&self.scheme_id, "deadline", raw))
            .transpose()?;
        let is_new = match self.is_new.as_deref() {
            None => false,
            Some(raw) => parse_flag(raw).ok_or_else(|| CatalogError::InvalidFlag {
                scheme_id: self.scheme_id.clone(),
                value: raw.to_string(),
            })?,
        };

        Ok(Scheme {
            scheme_id: self.scheme_id,
            scheme_name: self.scheme_name,
            level: self.level,
            state: self.state,
            category: self.category,
            min_age: self.min_age,
            max_age: self.max_age,
            min_income: self.min_income,
            max_income: self.max_income,
            target_group: self.target_group,
            benefits: self.benefits,
            is_active: self.is_active,
            last_updated,
            deadline,
            is_new,
        })
    }
}

fn parse_date(scheme_id: &str, field: &'static str, raw: &str) -> Result<NaiveDate, CatalogError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| CatalogError::InvalidDate {
        scheme_id: scheme_id.to_string(),
        field,
        value: raw.to_string(),
    })
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}
