//! Decoding free-form model output into a `Plan`.

use fitplan_core::Plan;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("no JSON object found in AI response")]
    NoJsonObject,

    #[error("malformed plan JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// First balanced `{...}` substring of `text`.
///
/// Braces inside JSON strings are ignored, so markdown fences or prose around
/// the object do not matter.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + i + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

pub fn parse_plan(text: &str) -> Result<Plan, ResponseError> {
    let json = extract_json_object(text).ok_or(ResponseError::NoJsonObject)?;
    Ok(serde_json::from_str(json)?)
}
