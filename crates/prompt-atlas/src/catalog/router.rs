use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};

use super::{CatalogCache, PromptPage, PromptQuery, PromptSource};
use crate::error::AppError;

struct CatalogRouteState<S> {
    cache: Arc<CatalogCache<S>>,
    page_size: usize,
}

impl<S> Clone for CatalogRouteState<S> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            page_size: self.page_size,
        }
    }
}

/// Router exposing catalog search backed by the shared cache.
pub fn catalog_router<S>(cache: Arc<CatalogCache<S>>, page_size: usize) -> Router
where
    S: PromptSource + 'static,
{
    Router::new()
        .route("/api/v1/prompts", get(search_handler::<S>))
        .with_state(CatalogRouteState { cache, page_size })
}

async fn search_handler<S>(
    State(state): State<CatalogRouteState<S>>,
    query: Result<Query<PromptQuery>, QueryRejection>,
) -> Result<Json<PromptPage>, AppError>
where
    S: PromptSource + 'static,
{
    let Query(query) =
        query.map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;
    let catalog = state.cache.catalog().await?;
    Ok(Json(catalog.search(&query, state.page_size)))
}
