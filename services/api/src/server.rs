use crate::cli::ServeArgs;
use crate::infra::{spawn_catalog_warmup, AppState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use prompt_atlas::catalog::{CatalogCache, CatalogError, ConfiguredSource, PromptSource};
use prompt_atlas::config::AppConfig;
use prompt_atlas::error::AppError;
use prompt_atlas::quality::PromptScorer;
use prompt_atlas::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let source = ConfiguredSource::from_config(&config.catalog).map_err(CatalogError::from)?;
    let cache = Arc::new(CatalogCache::new(source, config.catalog.cache_ttl));
    info!(
        source = %cache.source().describe(),
        ttl_secs = cache.ttl().as_secs(),
        "prompt catalog configured"
    );
    spawn_catalog_warmup(Arc::clone(&cache));

    let scorer = Arc::new(PromptScorer::default());
    let app = with_service_routes(scorer, cache, config.catalog.page_size)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "prompt atlas ready");

    axum::serve(listener, app).await?;
    Ok(())
}
