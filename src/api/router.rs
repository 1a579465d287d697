//! Route table.
//!
//! Returns a composable `Router` that can be mounted on any axum
//! server. Handlers take [`ApiContext`] via `State`; anything outside
//! the table falls through to axum's 404.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::dataset::Dataset;

/// Build the advisor router over a loaded dataset.
pub fn advisor_router(dataset: Arc<Dataset>) -> Router {
    build_router(ApiContext::new(dataset))
}

fn build_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/", get(endpoints::pages::index))
        .route("/index.html", get(endpoints::pages::index))
        .route("/symptoms", get(endpoints::symptoms::list))
        .route("/predict", post(endpoints::predict::form))
        .route("/api/predict", post(endpoints::predict::api))
        .with_state(ctx)
}
