//! Prediction endpoints.
//!
//! Two routes over the same pipeline (predict → assemble advisory):
//! - `POST /predict` — form submission from the index page, HTML result
//! - `POST /api/predict` — JSON in, JSON out
//!
//! Both decode their body from the raw string rather than through an
//! extractor: the form route must collect a repeated `symptoms` key
//! (which `Form` cannot represent), and the JSON route must map a parse
//! failure onto the `{"error": ...}` contract instead of the extractor's
//! default rejection.

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::advisory::{self, AdvisoryBundle};
use crate::api::error::{ApiError, PageError};
use crate::api::types::ApiContext;
use crate::predictor;
use crate::render;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub symptoms: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub disease: String,
    pub confidence: f64,
    pub symptoms: Vec<String>,
    pub info: AdvisoryBundle,
}

/// `POST /predict` — form-encoded symptom selection, rendered result.
pub async fn form(
    State(ctx): State<ApiContext>,
    body: String,
) -> Result<Html<String>, PageError> {
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(&body).map_err(|e| PageError(e.to_string()))?;
    let selected: Vec<String> = pairs
        .into_iter()
        .filter(|(key, _)| key == "symptoms")
        .map(|(_, value)| value)
        .collect();

    if selected.is_empty() {
        return Ok(Html(render::error_page(
            "Please select at least one symptom.",
        )));
    }

    let mut prediction = predictor::predict(&selected);
    prediction.confidence = round2(prediction.confidence);
    let info = advisory::assemble_info(&ctx.dataset, &prediction.condition);

    Ok(Html(render::result_page(&prediction, &selected, &info)))
}

/// `POST /api/predict` — JSON symptom selection.
pub async fn api(
    State(ctx): State<ApiContext>,
    body: String,
) -> Result<Json<PredictResponse>, ApiError> {
    let request: PredictRequest =
        serde_json::from_str(&body).map_err(|e| ApiError::Internal(e.to_string()))?;

    if request.symptoms.is_empty() {
        return Err(ApiError::NoSymptoms);
    }

    let prediction = predictor::predict(&request.symptoms);
    let info = advisory::assemble_info(&ctx.dataset, &prediction.condition);

    Ok(Json(PredictResponse {
        disease: prediction.condition,
        confidence: round2(prediction.confidence),
        symptoms: request.symptoms,
        info,
    }))
}

/// Confidence is rounded to two decimals at the response boundary.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_truncates_to_two_decimals() {
        assert_eq!(round2(100.0 / 3.0), 33.33);
        assert_eq!(round2(100.0), 100.0);
        assert_eq!(round2(50.0), 50.0);
    }
}
