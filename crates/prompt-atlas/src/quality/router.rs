use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{advise, showcase, PromptScorer, QualityReport};
use crate::error::AppError;

/// Router exposing prompt scoring and the before/after showcase.
pub fn quality_router(scorer: Arc<PromptScorer>) -> Router {
    Router::new()
        .route("/api/v1/quality/score", post(score_handler))
        .route("/api/v1/quality/showcase", get(showcase_handler))
        .with_state(scorer)
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub report: QualityReport,
    pub advice: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ScoredPrompt {
    pub text: &'static str,
    pub report: QualityReport,
}

#[derive(Debug, Serialize)]
pub struct ShowcaseExampleView {
    pub title: &'static str,
    pub before: ScoredPrompt,
    pub after: ScoredPrompt,
}

#[derive(Debug, Serialize)]
pub struct ShowcaseTierView {
    pub label: &'static str,
    pub examples: Vec<ShowcaseExampleView>,
}

pub(crate) async fn score_handler(
    State(scorer): State<Arc<PromptScorer>>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResponse>, AppError> {
    let Json(request) =
        payload.map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;

    let report = scorer.score(&request.prompt);
    debug!(score = report.score, grade = %report.grade, "scored prompt");
    let advice = advise(&report);

    Ok(Json(ScoreResponse { report, advice }))
}

pub(crate) async fn showcase_handler(
    State(scorer): State<Arc<PromptScorer>>,
) -> Json<Vec<ShowcaseTierView>> {
    let tiers = showcase()
        .iter()
        .map(|tier| ShowcaseTierView {
            label: tier.label,
            examples: tier
                .examples
                .iter()
                .map(|example| ShowcaseExampleView {
                    title: example.title,
                    before: ScoredPrompt {
                        text: example.before,
                        report: scorer.score(example.before),
                    },
                    after: ScoredPrompt {
                        text: example.after,
                        report: scorer.score(example.after),
                    },
                })
                .collect(),
        })
        .collect();

    Json(tiers)
}
