//! JSON extraction from free-form model output.
//!
//! Candidates are tried in order and the first that parses wins:
//! 1. the whole (trimmed) text
//! 2. the first ```` ```json ```` fenced block
//! 3. the first fenced block of any kind
//! 4. the span from the first `{` to the last `}`

use serde_json::Value;
use thiserror::Error;

const FENCE: &str = "```";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("nenhum JSON encontrado na resposta")]
    NotFound,

    #[error("{0}")]
    Syntax(#[from] serde_json::Error),
}

/// Extracts the first parseable JSON value from `raw`.
pub fn extract_json(raw: &str) -> Result<Value, ExtractError> {
    let candidates = [
        Some(raw.trim()),
        tagged_fence_block(raw, "json"),
        any_fence_block(raw),
        brace_span(raw),
    ];

    let mut last_error = ExtractError::NotFound;
    for candidate in candidates.into_iter().flatten() {
        if candidate.is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(candidate) {
            Ok(value) => return Ok(value),
            Err(e) => last_error = ExtractError::Syntax(e),
        }
    }
    Err(last_error)
}

/// Contents of the first fenced block whose info string is `tag` (case-insensitive).
fn tagged_fence_block<'a>(raw: &'a str, tag: &str) -> Option<&'a str> {
    let mut rest = raw;
    while let Some(open) = rest.find(FENCE) {
        let after = &rest[open + FENCE.len()..];
        let (info, body) = split_info_line(after);
        let close = body.find(FENCE)?;
        if info.eq_ignore_ascii_case(tag) {
            return Some(body[..close].trim());
        }
        rest = &body[close + FENCE.len()..];
    }
    None
}

/// Contents of the first fenced block, skipping its info string.
fn any_fence_block(raw: &str) -> Option<&str> {
    let open = raw.find(FENCE)?;
    let (_, body) = split_info_line(&raw[open + FENCE.len()..]);
    let close = body.find(FENCE)?;
    Some(body[..close].trim())
}

/// Splits the text after an opening fence into its info string and the block body.
/// An info string only exists when the fence line holds a single word.
fn split_info_line(after_fence: &str) -> (&str, &str) {
    match after_fence.find('\n') {
        Some(nl) => {
            let info = after_fence[..nl].trim();
            if info.is_empty() || (!info.contains(char::is_whitespace) && !info.starts_with('{')) {
                (info, &after_fence[nl + 1..])
            } else {
                ("", after_fence)
            }
        }
        None => ("", after_fence),
    }
}

fn brace_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}
