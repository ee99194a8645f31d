//! Response Normalizer — turns raw model text into a validated `AnalysisResponse`.

use thiserror::Error;
use tracing::warn;

use crate::analysis::coerce::{coerce_refactored_code, coerce_score, coerce_suggestions, MIN_SCORE};
use crate::analysis::extract::extract_json;
use crate::analysis::keys::canonicalize;
use crate::analysis::models::AnalysisResponse;
use crate::llm_client::ProviderError;

/// User-visible failures. The `Display` text is what the caller reads as the single suggestion.
#[derive(Debug, Error)]
pub enum AnalysisFailure {
    #[error("Modelo de IA não configurado.")]
    ProviderUnavailable,

    #[error("Ocorreu um erro ao comunicar com a IA: {0}.")]
    ProviderCall(#[from] ProviderError),

    #[error("A IA retornou um JSON inválido: {0}.")]
    MalformedResponse(String),
}

impl AnalysisFailure {
    /// The degraded response sent in place of an analysis.
    pub fn into_response(self, original_code: &str) -> AnalysisResponse {
        AnalysisResponse {
            score: MIN_SCORE,
            suggestions: vec![self.to_string()],
            refactored_code: original_code.to_string(),
        }
    }
}

/// Parses and repairs the model's reply.
pub fn normalize(raw: &str, original_code: &str) -> Result<AnalysisResponse, AnalysisFailure> {
    let value =
        extract_json(raw).map_err(|e| AnalysisFailure::MalformedResponse(e.to_string()))?;

    let object = value.as_object().ok_or_else(|| {
        AnalysisFailure::MalformedResponse("esperado um objeto JSON".to_string())
    })?;

    let fields = canonicalize(object);

    Ok(AnalysisResponse {
        score: coerce_score(fields.score.as_ref()),
        suggestions: coerce_suggestions(fields.suggestions.as_ref()),
        refactored_code: coerce_refactored_code(fields.refactored_code.as_ref(), original_code),
    })
}

/// Like `normalize`, but folds failures into the degraded response. Never fails.
pub fn normalize_or_fallback(raw: &str, original_code: &str) -> AnalysisResponse {
    normalize(raw, original_code).unwrap_or_else(|failure| {
        warn!("Could not normalize model output: {failure}");
        failure.into_response(original_code)
    })
}
