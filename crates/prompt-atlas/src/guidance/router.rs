use axum::{extract::Path, routing::get, Json, Router};
use serde::Serialize;

use super::{guide_for, HighlightedRole, RoleGuide, HIGHLIGHTED_ROLES};
use crate::catalog::FEATURED_ROLES;

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub featured: &'static [&'static str],
    pub highlighted: &'static [HighlightedRole],
}

/// Router exposing the role lists and per-role guides.
pub fn guidance_router() -> Router {
    Router::new()
        .route("/api/v1/roles", get(roles_handler))
        .route("/api/v1/roles/:role/guide", get(guide_handler))
}

async fn roles_handler() -> Json<RolesResponse> {
    Json(RolesResponse {
        featured: FEATURED_ROLES,
        highlighted: HIGHLIGHTED_ROLES,
    })
}

async fn guide_handler(Path(role): Path<String>) -> Json<RoleGuide> {
    Json(guide_for(role.trim()))
}
