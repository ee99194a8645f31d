//! Best-effort conversion of loosely typed model values into the response fields.
//! Every function here is total: bad input is repaired, never rejected.

use serde_json::Value;
use tracing::debug;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;
pub const MAX_SUGGESTIONS: usize = 5;
pub const NO_SUGGESTIONS_PLACEHOLDER: &str = "Nenhuma sugestão foi retornada pela IA.";

const BULLET_MARKERS: &[char] = &['-', '*', '•', '+'];

/// Numeric score clamped into [0, 10]. Anything unreadable counts as 0.
/// Infinite values clamp to the nearest bound; NaN counts as unreadable.
pub fn coerce_score(value: Option<&Value>) -> f64 {
    let parsed = match value {
        // Literals beyond f64 range (e.g. 1e400) are kept verbatim by serde_json and
        // only overflow here, to +-inf.
        Some(Value::Number(n)) => n.as_f64().or_else(|| n.to_string().parse::<f64>().ok()),
        Some(Value::String(s)) => parse_score_text(s),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    match parsed.filter(|s| !s.is_nan()) {
        Some(score) => score.clamp(MIN_SCORE, MAX_SCORE),
        None => {
            debug!("Score {value:?} is not numeric, defaulting to {MIN_SCORE}");
            MIN_SCORE
        }
    }
}

/// Accepts "7.5", " 8 ", "7,5" and "8/10".
fn parse_score_text(text: &str) -> Option<f64> {
    let text = text.trim();
    let text = text.strip_suffix("/10").map(str::trim_end).unwrap_or(text);
    text.replace(',', ".").parse::<f64>().ok()
}

/// Between 1 and `MAX_SUGGESTIONS` entries, in model order.
pub fn coerce_suggestions(value: Option<&Value>) -> Vec<String> {
    let mut suggestions: Vec<String> = match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(text)) => split_suggestion_text(text),
        Some(Value::Array(items)) => items.iter().filter_map(stringify_entry).collect(),
        Some(other) => vec![other.to_string()],
    };

    if suggestions.len() > MAX_SUGGESTIONS {
        debug!(
            "Truncating {} suggestions to {MAX_SUGGESTIONS}",
            suggestions.len()
        );
        suggestions.truncate(MAX_SUGGESTIONS);
    }

    if suggestions.is_empty() {
        debug!("No usable suggestions, using placeholder");
        suggestions.push(NO_SUGGESTIONS_PLACEHOLDER.to_string());
    }

    suggestions
}

fn stringify_entry(item: &Value) -> Option<String> {
    match item {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Splits a free-text suggestion blob on newlines and semicolons.
fn split_suggestion_text(text: &str) -> Vec<String> {
    text.split(|c: char| c == '\n' || c == ';')
        .map(strip_bullet)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Removes a leading list marker ("- ", "* ", "• ", "1. ", "2) ").
fn strip_bullet(line: &str) -> &str {
    let line = line.trim();

    if let Some(rest) = line.strip_prefix(BULLET_MARKERS) {
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return rest.trim_start();
        }
    }

    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 {
        if let Some(rest) = line[digits..].strip_prefix(&['.', ')'][..]) {
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                return rest.trim_start();
            }
        }
    }

    line
}

/// The model's code as a string; the submitted code when the model gave none.
pub fn coerce_refactored_code(value: Option<&Value>, original_code: &str) -> String {
    match value {
        Some(Value::String(code)) if !code.trim().is_empty() => code.clone(),
        None | Some(Value::Null) | Some(Value::String(_)) => {
            debug!("No refactored code returned, echoing submitted code");
            original_code.to_string()
        }
        Some(other) => other.to_string(),
    }
}
