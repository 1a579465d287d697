//! Symptom list endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct SymptomsResponse {
    pub symptoms: Vec<String>,
}

/// `GET /symptoms` — every known symptom name, sorted ascending.
pub async fn list(State(ctx): State<ApiContext>) -> Json<SymptomsResponse> {
    Json(SymptomsResponse {
        symptoms: ctx.dataset.sorted_symptoms(),
    })
}
