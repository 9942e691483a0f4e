//! Plant analysis HTTP handler.
//!
//! The whole pipeline for one request: validate the two input fields, build
//! the instruction prompt, make the single model call, parse the reply, and
//! hand the typed verdict back as the response body.

use axum::{extract::State, Json};
use serde::Deserialize;

use jasmim_core::{AnalysisType, Error, PlantAnalysis};
use jasmim_inference::analysis_prompt;

use crate::{ApiError, AppState, MSG_REQUIRED_FIELDS};

/// Request body for analyzing a plant photo.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AnalyzeRequest {
    /// Image reference: a data URI or an externally resolvable URL (required).
    #[serde(default)]
    pub image: Option<String>,
    /// Requested analysis mode (required).
    #[serde(default)]
    pub analysis_type: Option<AnalysisType>,
}

/// Analyze a plant photo with the configured vision model.
///
/// Validation happens before any network call: an absent or empty `image`
/// or `analysis_type` answers 400 without invoking the backend. Everything
/// that goes wrong after validation collapses into the generic 500 body;
/// the underlying error is logged, never returned.
///
/// # Request Body
/// - `image`: data URI or image URL (required)
/// - `analysis_type`: `"diagnostico"` or `"identificacao"` (required)
///
/// # Returns
/// - 200 OK with the model's structured verdict, passed through as-is
/// - 400 Bad Request if a required field is absent or empty
/// - 500 Internal Server Error on model or reply failures
#[utoipa::path(post, path = "/api/v1/plants/analyze", tag = "Plants",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Structured analysis", body = PlantAnalysis),
        (status = 400, description = "Missing image or analysis type"),
        (status = 405, description = "Method not allowed"),
        (status = 500, description = "Model call or reply handling failed"),
    ))]
pub async fn analyze_plant(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<PlantAnalysis>, ApiError> {
    let image = req
        .image
        .as_deref()
        .filter(|image| !image.is_empty())
        .ok_or_else(|| Error::InvalidInput(MSG_REQUIRED_FIELDS.to_string()))?;
    let analysis_type = req
        .analysis_type
        .ok_or_else(|| Error::InvalidInput(MSG_REQUIRED_FIELDS.to_string()))?;

    let prompt = analysis_prompt(analysis_type);
    let reply = state.backend.analyze_image(image, &prompt).await?;
    let analysis = PlantAnalysis::from_reply(&reply)?;

    Ok(Json(analysis))
}
