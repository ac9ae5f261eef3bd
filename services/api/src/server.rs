use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState};
use crate::routes::with_recommendation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use scheme_assist::config::AppConfig;
use scheme_assist::error::AppError;
use scheme_assist::telemetry;
use scheme_assist::workflows::recommendation::{RecommendationService, SystemClock};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = Arc::new(load_catalog(args.catalog.take(), &config)?);
    info!(
        schemes = catalog.len(),
        active = catalog.active_count(),
        "scheme catalog ready"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let recommendation_service = Arc::new(RecommendationService::new(catalog, SystemClock));

    let app = with_recommendation_routes(recommendation_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "scheme recommendation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
