use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde_json::json;

use super::error::ApiError;
use super::SharedState;
use crate::core::age::AgeCalculator;
use crate::core::compatibility::CompatibilityCalculator;
use crate::core::date_input::require_date;
use crate::domain::model::{AgeResult, CalculateRequest, CompatibilityRequest, CompatibilityResult};

pub async fn calculate(
    State(state): State<SharedState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<AgeResult>, ApiError> {
    let Json(request) = payload?;
    let birth = require_date("birthDate", request.birth_date.as_ref())?;

    let result = AgeCalculator::new(state.clock.clone()).calculate(birth);
    Ok(Json(result))
}

pub async fn compatibility(
    payload: Result<Json<CompatibilityRequest>, JsonRejection>,
) -> Result<Json<CompatibilityResult>, ApiError> {
    let Json(request) = payload?;
    let one = require_date("dateOne", request.date_one.as_ref())?;
    let two = require_date("dateTwo", request.date_two.as_ref())?;

    Ok(Json(CompatibilityCalculator::calculate(one, two)))
}

/// CORS preflight; the headers themselves are added by the router layers.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub async fn livez() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
