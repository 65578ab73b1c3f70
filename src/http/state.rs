//! Application state for the HTTP server.

use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::predict::Predictor;

/// Shared application state passed to all handlers.
///
/// The predictor is optional: catalog-only deployments run without model
/// artifacts and the predict endpoints respond 503.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CatalogStore>,
    pub predictor: Option<Arc<Predictor>>,
}

impl AppState {
    pub fn new(store: Arc<CatalogStore>, predictor: Option<Arc<Predictor>>) -> Self {
        Self { store, predictor }
    }
}
