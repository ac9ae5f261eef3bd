//! Immutable scheme catalog, its importers, and profile-independent statistics.

pub mod domain;
mod importer;
mod parser;
mod stats;

pub use domain::{Scheme, SchemeCategory, SchemeLevel, UnknownCategory, ALL_STATES, NATIONWIDE};
pub use importer::{CatalogDocument, CatalogImporter};
pub use stats::{CatalogStats, LevelCounts};

use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use tracing::debug;

const BUNDLED_CATALOG: &str = include_str!("../../../data/schemes.json");

/// Data problems detected while loading a catalog. A catalog that fails any of these checks is
/// never handed to the recommendation engine.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read scheme catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("scheme '{scheme_id}' appears more than once")]
    DuplicateScheme { scheme_id: String },
    #[error("scheme '{scheme_id}' is missing a value for {field}")]
    MissingField {
        scheme_id: String,
        field: &'static str,
    },
    #[error("scheme '{scheme_id}' has min_age {min} above max_age {max}")]
    InvertedAgeRange { scheme_id: String, min: u8, max: u8 },
    #[error("scheme '{scheme_id}' has min_income {min} above max_income {max}")]
    InvertedIncomeRange {
        scheme_id: String,
        min: u64,
        max: u64,
    },
    #[error("scheme '{scheme_id}' has an unparseable {field} '{value}' (expected YYYY-MM-DD)")]
    InvalidDate {
        scheme_id: String,
        field: &'static str,
        value: String,
    },
    #[error("scheme '{scheme_id}' has an unparseable is_new flag '{value}'")]
    InvalidFlag { scheme_id: String, value: String },
}

/// Validated, read-only scheme collection shared across requests.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SchemeCatalog {
    schemes: Vec<Arc<Scheme>>,
    categories: Vec<SchemeCategory>,
    states: Vec<String>,
}

impl SchemeCatalog {
    /// Validate `schemes` and derive the category and state reference lists from them.
    pub fn new(schemes: Vec<Scheme>) -> Result<Self, CatalogError> {
        Self::with_reference_lists(schemes, None, None)
    }

    pub(crate) fn with_reference_lists(
        schemes: Vec<Scheme>,
        categories: Option<Vec<SchemeCategory>>,
        states: Option<Vec<String>>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for scheme in &schemes {
            validate_scheme(scheme)?;
            if !seen.insert(scheme.scheme_id.as_str()) {
                return Err(CatalogError::DuplicateScheme {
                    scheme_id: scheme.scheme_id.clone(),
                });
            }
        }

        let categories = categories.unwrap_or_else(|| {
            let present: BTreeSet<SchemeCategory> =
                schemes.iter().map(|scheme| scheme.category).collect();
            present.into_iter().collect()
        });

        let states = states.unwrap_or_else(|| {
            let present: BTreeSet<&str> = schemes
                .iter()
                .filter(|scheme| !scheme.is_nationwide())
                .map(|scheme| scheme.state.as_str())
                .collect();
            present.into_iter().map(str::to_string).collect()
        });

        debug!(
            schemes = schemes.len(),
            categories = categories.len(),
            states = states.len(),
            "scheme catalog validated"
        );

        Ok(Self {
            schemes: schemes.into_iter().map(Arc::new).collect(),
            categories,
            states,
        })
    }

    /// Sample catalog compiled into the crate for demos and local runs.
    pub fn bundled() -> Result<Self, CatalogError> {
        CatalogImporter::from_json_reader(BUNDLED_CATALOG.as_bytes())
    }

    /// Every scheme in catalog order, active or not.
    pub fn schemes(&self) -> &[Arc<Scheme>] {
        &self.schemes
    }

    pub fn active(&self) -> impl Iterator<Item = &Arc<Scheme>> {
        self.schemes.iter().filter(|scheme| scheme.is_active)
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn get(&self, scheme_id: &str) -> Option<&Arc<Scheme>> {
        self.schemes
            .iter()
            .find(|scheme| scheme.scheme_id == scheme_id)
    }

    pub fn categories(&self) -> &[SchemeCategory] {
        &self.categories
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_schemes(self.active().map(Arc::as_ref))
    }
}

fn validate_scheme(scheme: &Scheme) -> Result<(), CatalogError> {
    let missing = |field| CatalogError::MissingField {
        scheme_id: scheme.scheme_id.clone(),
        field,
    };

    if scheme.scheme_id.trim().is_empty() {
        return Err(missing("scheme_id"));
    }
    if scheme.scheme_name.trim().is_empty() {
        return Err(missing("scheme_name"));
    }
    if scheme.state.trim().is_empty() {
        return Err(missing("state"));
    }

    if scheme.min_age > scheme.max_age {
        return Err(CatalogError::InvertedAgeRange {
            scheme_id: scheme.scheme_id.clone(),
            min: scheme.min_age,
            max: scheme.max_age,
        });
    }

    if scheme.min_income > scheme.max_income {
        return Err(CatalogError::InvertedIncomeRange {
            scheme_id: scheme.scheme_id.clone(),
            min: scheme.min_income,
            max: scheme.max_income,
        });
    }

    Ok(())
}
