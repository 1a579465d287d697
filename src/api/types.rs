//! Shared state for the HTTP layer.

use std::sync::Arc;

use crate::dataset::Dataset;

/// Shared context for all routes: the reference data, loaded once at
/// startup and read-only afterwards. Cloning is an `Arc` bump.
#[derive(Clone)]
pub struct ApiContext {
    pub dataset: Arc<Dataset>,
}

impl ApiContext {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }
}
