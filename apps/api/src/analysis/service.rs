use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::analysis::models::{AnalysisRequest, AnalysisResponse};
use crate::analysis::normalizer::{normalize_or_fallback, AnalysisFailure};
use crate::analysis::prompts::build_analysis_prompt;
use crate::llm_client::AnalysisProvider;

/// Runs one analysis end to end: prompt → provider → normalizer.
///
/// Never fails. A missing provider or a provider error becomes a degraded response
/// carrying the reason as its only suggestion.
pub async fn analyze_code(
    provider: Option<&dyn AnalysisProvider>,
    request: &AnalysisRequest,
) -> AnalysisResponse {
    let span = info_span!(
        "analysis",
        request_id = %Uuid::new_v4(),
        language = request.language(),
        code_len = request.code.len()
    );

    async move {
        let Some(provider) = provider else {
            warn!("Analysis requested but no provider is configured");
            return AnalysisFailure::ProviderUnavailable.into_response(&request.code);
        };

        let prompt = build_analysis_prompt(request.language(), &request.code);

        let raw = match provider.generate(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Provider call failed: {e}");
                return AnalysisFailure::from(e).into_response(&request.code);
            }
        };

        let response = normalize_or_fallback(&raw, &request.code);
        info!(
            score = response.score,
            suggestions = response.suggestions.len(),
            "Analysis complete"
        );
        response
    }
    .instrument(span)
    .await
}
