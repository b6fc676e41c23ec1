use std::sync::Arc;

use crate::dispatch::{KeywordResponder, Responder};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable reply strategy. Default: KeywordResponder.
    pub responder: Arc<dyn Responder>,
}

impl AppState {
    pub fn new(responder: Arc<dyn Responder>) -> Self {
        Self { responder }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(KeywordResponder))
    }
}
