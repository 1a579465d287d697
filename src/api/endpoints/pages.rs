//! Browser-facing pages.

use axum::extract::State;
use axum::response::Html;

use crate::api::types::ApiContext;
use crate::render;

/// `GET /` and `GET /index.html` — the symptom-selection form.
pub async fn index(State(ctx): State<ApiContext>) -> Html<String> {
    Html(render::index_page(&ctx.dataset.sorted_symptoms()))
}
