use std::sync::Arc;

use crate::llm_client::AnalysisProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when `GOOGLE_API_KEY` is unset; every analysis then degrades to the
    /// "not configured" response.
    pub provider: Option<Arc<dyn AnalysisProvider>>,
}
