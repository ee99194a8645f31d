use serde::{Deserialize, Serialize};

pub const DEFAULT_LANGUAGE: &str = "python";

/// Body of `POST /analise`. The Portuguese field names of the first frontend are accepted too.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    #[serde(alias = "codigo")]
    pub code: String,
    #[serde(default, alias = "linguagem")]
    pub language: Option<String>,
}

impl AnalysisRequest {
    /// The submitted language, `"python"` when missing or blank.
    pub fn language(&self) -> &str {
        self.language
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LANGUAGE)
    }
}

/// The strict three-field contract returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    /// 0.0 – 10.0
    pub score: f64,
    /// 1 – 5 entries
    pub suggestions: Vec<String>,
    pub refactored_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_language_to_python() {
        let req: AnalysisRequest = serde_json::from_str(r#"{"code": "print(1)"}"#).unwrap();
        assert_eq!(req.language(), "python");

        let req: AnalysisRequest =
            serde_json::from_str(r#"{"code": "print(1)", "language": null}"#).unwrap();
        assert_eq!(req.language(), "python");

        let req: AnalysisRequest =
            serde_json::from_str(r#"{"code": "print(1)", "language": "  "}"#).unwrap();
        assert_eq!(req.language(), "python");
    }

    #[test]
    fn test_request_accepts_portuguese_aliases() {
        let req: AnalysisRequest =
            serde_json::from_str(r#"{"codigo": "fn main() {}", "linguagem": "rust"}"#).unwrap();
        assert_eq!(req.code, "fn main() {}");
        assert_eq!(req.language(), "rust");
    }

    #[test]
    fn test_response_serializes_camel_case_keys() {
        let resp = AnalysisResponse {
            score: 7.5,
            suggestions: vec!["a".to_string()],
            refactored_code: "x = 1".to_string(),
        };
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["score"], 7.5);
        assert_eq!(value["suggestions"][0], "a");
        assert_eq!(value["refactoredCode"], "x = 1");
        assert!(value.get("refactored_code").is_none());
    }
}
