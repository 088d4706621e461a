//! Axum route handlers for the Roadmap API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderName, HeaderValue},
    response::IntoResponse,
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::roadmap::ai::generate_roadmap;
use crate::roadmap::assembler::{analyze, GoalAnalysis};
use crate::roadmap::validation::RoadmapRequest;
use crate::state::AppState;

pub const ROADMAP_SOURCE_HEADER: &str = "x-roadmap-source";

/// POST /api/v1/roadmap
///
/// Validates the learner profile and returns a roadmap. The AI drafter is
/// tried first when configured; the `x-roadmap-source` header says which
/// path produced the body.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    payload: Result<Json<RoadmapRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;
    let profile = request.into_profile()?;

    let generated = generate_roadmap(
        &profile,
        state.drafter.as_deref(),
        state.config.ai_timeout,
    )
    .await;

    info!(
        source = generated.source.as_str(),
        modules = generated.roadmap.modules.len(),
        "Roadmap generated"
    );

    Ok((
        [(
            HeaderName::from_static(ROADMAP_SOURCE_HEADER),
            HeaderValue::from_static(generated.source.as_str()),
        )],
        Json(generated.roadmap),
    ))
}

/// POST /api/v1/roadmap/analyze
///
/// Returns topic, domain and intents for a goal without building modules.
pub async fn handle_analyze_goal(
    payload: Result<Json<RoadmapRequest>, JsonRejection>,
) -> Result<Json<GoalAnalysis>, AppError> {
    let Json(request) = payload?;
    let profile = request.into_profile()?;
    Ok(Json(analyze(&profile)))
}
