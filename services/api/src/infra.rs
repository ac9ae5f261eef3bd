use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use scheme_assist::config::AppConfig;
use scheme_assist::error::AppError;
use scheme_assist::workflows::catalog::{CatalogImporter, SchemeCatalog};
use scheme_assist::workflows::recommendation::Gender;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Resolve the catalog from an explicit path, then the configured path, then the bundled sample.
pub(crate) fn load_catalog(
    override_path: Option<PathBuf>,
    config: &AppConfig,
) -> Result<SchemeCatalog, AppError> {
    match override_path.or_else(|| config.catalog.path.clone()) {
        Some(path) => Ok(CatalogImporter::from_path(path)?),
        None => {
            info!("using bundled sample scheme catalog");
            Ok(SchemeCatalog::bundled()?)
        }
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_gender(raw: &str) -> Result<Gender, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "male" | "m" => Ok(Gender::Male),
        "female" | "f" => Ok(Gender::Female),
        "other" => Ok(Gender::Other),
        _ => Err(format!("unknown gender '{raw}' (expected male, female or other)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scheme_assist::config::{
        AppEnvironment, CatalogConfig, ServerConfig, TelemetryConfig,
    };

    fn config(path: Option<PathBuf>) -> AppConfig {
        AppConfig {
            environment: AppEnvironment::Test,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
            catalog: CatalogConfig { path },
        }
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date(" 2026-10-15 "),
            Ok(NaiveDate::from_ymd_opt(2026, 10, 15).expect("valid date"))
        );
        assert!(parse_date("15/10/2026").is_err());
    }

    #[test]
    fn parses_gender_case_insensitively() {
        assert_eq!(parse_gender("Female"), Ok(Gender::Female));
        assert_eq!(parse_gender("M"), Ok(Gender::Male));
        assert!(parse_gender("unknown").is_err());
    }

    #[test]
    fn falls_back_to_bundled_catalog() {
        let catalog = load_catalog(None, &config(None)).expect("bundled catalog");
        assert!(!catalog.is_empty());
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let result = load_catalog(
            Some(PathBuf::from("/nonexistent/schemes.json")),
            &config(None),
        );
        assert!(matches!(result, Err(AppError::Catalog(_))));
    }
}
