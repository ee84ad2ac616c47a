//! Resume generation endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tailor::{PostingLimits, ProfileInput, ResumeTemplateData, TailorError};
use tracing::{error, info};

use crate::server::error::{ApiError, GENERATION_FAILED};
use crate::server::state::AppState;

/// Request body. `jobDescription` is kept loose so a non-string value gets
/// the same answer as a missing one.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub job_description: Option<Value>,
    #[serde(default)]
    pub user_profile: Option<ProfileInput>,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub data: ResumeTemplateData,
    pub message: &'static str,
}

pub async fn generate_resume(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let limits = *state.tailor.limits();

    let text = request
        .job_description
        .as_ref()
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::BadRequest(too_short(&limits)))?;

    let posting = state
        .tailor
        .parse_posting(text)
        .map_err(|e| posting_error(e, &limits))?;
    let profile = request.user_profile.map(ProfileInput::into_candidate);

    info!(
        "Generating resume for {} character posting (profile: {})",
        posting.len(),
        profile.is_some()
    );

    let tailor = state.tailor.clone();
    let data = tokio::task::spawn_blocking(move || tailor.generate(posting.as_str(), profile.as_ref()))
        .await
        .map_err(|e| {
            error!("Resume generation task failed: {}", e);
            ApiError::Internal(GENERATION_FAILED.to_string())
        })?;

    Ok(Json(GenerateResponse {
        success: true,
        data,
        message: "Resume generated successfully",
    }))
}

fn posting_error(err: TailorError, limits: &PostingLimits) -> ApiError {
    match err {
        TailorError::PostingTooShort { .. } => ApiError::BadRequest(too_short(limits)),
        TailorError::PostingTooLong { .. } => ApiError::BadRequest(format!(
            "Job description must not exceed {} characters",
            thousands(limits.max_chars)
        )),
        other => ApiError::from(other),
    }
}

fn too_short(limits: &PostingLimits) -> String {
    format!(
        "Job description is required and must be at least {} characters long",
        thousands(limits.min_chars)
    )
}

/// `15000` -> `15,000`.
fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
