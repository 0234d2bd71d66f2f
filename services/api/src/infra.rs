use metrics_exporter_prometheus::PrometheusHandle;
use prompt_atlas::catalog::{CatalogCache, CatalogError, PromptCatalog, PromptSource};
use prompt_atlas::error::AppError;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// One-off fetch for CLI commands that do not keep a cache around.
pub(crate) async fn fetch_catalog<S>(source: &S) -> Result<PromptCatalog, AppError>
where
    S: PromptSource,
{
    let body = source.fetch().await.map_err(CatalogError::from)?;
    Ok(PromptCatalog::from_reader(body.as_bytes())?)
}

/// Fills the cache in the background so the first request does not pay for the fetch.
pub(crate) fn spawn_catalog_warmup<S>(cache: Arc<CatalogCache<S>>)
where
    S: PromptSource + 'static,
{
    tokio::spawn(async move {
        if let Err(err) = cache.catalog().await {
            warn!(error = %err, "prompt catalog warmup failed; will retry on first request");
        }
    });
}
