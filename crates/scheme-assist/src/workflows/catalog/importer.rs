use super::domain::{Scheme, SchemeCategory};
use super::parser::parse_rows;
use super::{CatalogError, SchemeCatalog};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::info;

/// On-disk catalog layout: the scheme list plus optional form reference lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub schemes: Vec<Scheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<SchemeCategory>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<String>>,
}

pub struct CatalogImporter;

impl CatalogImporter {
    /// Load a catalog file, choosing the CSV reader for `.csv` files and JSON otherwise.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<SchemeCatalog, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        let catalog = if is_csv {
            Self::from_csv_reader(file)?
        } else {
            Self::from_json_reader(file)?
        };

        info!(
            path = %path.display(),
            schemes = catalog.len(),
            active = catalog.active_count(),
            "scheme catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<SchemeCatalog, CatalogError> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    pub fn from_document(document: CatalogDocument) -> Result<SchemeCatalog, CatalogError> {
        SchemeCatalog::with_reference_lists(document.schemes, document.categories, document.states)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<SchemeCatalog, CatalogError> {
        let schemes = parse_rows(reader)?;
        SchemeCatalog::new(schemes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::catalog::SchemeLevel;
    use chrono::NaiveDate;

    const JSON_CATALOG: &str = r#"{
        "schemes": [
            {
                "scheme_id": "PMKSN",
                "scheme_name": "PM Kisan Samman Nidhi",
                "level": "Central",
                "state": "All",
                "category": "Agriculture",
                "min_age": 18,
                "max_age": 80,
                "min_income": 0,
                "max_income": 200000,
                "target_group": "Small and marginal farmers",
                "benefits": "Rs 6000 per year in three instalments",
                "is_active": true,
                "last_updated": "2025-01-10",
                "deadline": "2025-03-31"
            },
            {
                "scheme_id": "KA-WW-01",
                "scheme_name": "Gruha Lakshmi",
                "level": "State",
                "state": "Karnataka",
                "category": "Women Welfare",
                "min_age": 18,
                "max_age": 65,
                "min_income": 0,
                "max_income": 300000,
                "target_group": "Women heads of household",
                "benefits": "Rs 2000 monthly assistance",
                "is_active": true,
                "last_updated": "2024-12-01",
                "is_new": true
            }
        ],
        "states": ["Karnataka", "Kerala"]
    }"#;

    #[test]
    fn json_reader_keeps_explicit_reference_lists() {
        let catalog =
            CatalogImporter::from_json_reader(JSON_CATALOG.as_bytes()).expect("catalog parses");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.states(), &["Karnataka".to_string(), "Kerala".to_string()]);
        assert_eq!(
            catalog.categories(),
            &[SchemeCategory::Agriculture, SchemeCategory::WomenWelfare]
        );

        let farmer = catalog.get("PMKSN").expect("scheme present");
        assert_eq!(farmer.level, SchemeLevel::Central);
        assert_eq!(farmer.deadline, NaiveDate::from_ymd_opt(2025, 3, 31));
        assert!(!farmer.is_new);
        assert!(catalog.get("KA-WW-01").expect("scheme present").is_new);
    }

    #[test]
    fn json_reader_rejects_unknown_category() {
        let raw = JSON_CATALOG.replace("\"Women Welfare\"", "\"Astrology\"");
        let err = CatalogImporter::from_json_reader(raw.as_bytes()).expect_err("rejected");
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn csv_reader_builds_catalog() {
        let csv = "scheme_id,scheme_name,level,state,category,min_age,max_age,min_income,max_income,target_group,benefits,is_active,last_updated,deadline,is_new\n\
PMAY-G,Pradhan Mantri Awas Yojana - Gramin,Central,All,Housing,18,99,0,300000,Rural households without pucca house,Rs 1.2 lakh construction assistance,true,2025-02-01,,\n\
TN-EDU-2,Pudhumai Penn,State,Tamil Nadu,Education,17,25,0,250000,Girl students in higher education,Rs 1000 monthly,true,2025-01-05,2025-06-30,yes\n";

        let catalog = CatalogImporter::from_csv_reader(csv.as_bytes()).expect("csv parses");
        assert_eq!(catalog.len(), 2);

        let housing = catalog.get("PMAY-G").expect("housing scheme");
        assert!(housing.deadline.is_none());
        assert!(!housing.is_new);

        let education = catalog.get("TN-EDU-2").expect("education scheme");
        assert_eq!(education.level, SchemeLevel::State);
        assert_eq!(education.deadline, NaiveDate::from_ymd_opt(2025, 6, 30));
        assert!(education.is_new);
        assert_eq!(catalog.states(), &["Tamil Nadu".to_string()]);
    }

    #[test]
    fn from_path_reports_missing_file() {
        let err = CatalogImporter::from_path("does/not/exist/schemes.json")
            .expect_err("missing file");
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
