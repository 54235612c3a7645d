//! Utilities for extracting structured data from LLM responses.
//!
//! Even when a prompt demands JSON-only output, responses often arrive
//! wrapped in markdown code fences or mixed with commentary. These
//! helpers recover the JSON payload from common response patterns.

use fabulist_error::{FabulistResult, JsonError};

/// Extract JSON from a response that may contain markdown or extra text.
///
/// Tries, in order: a ```json code fence, any ``` code fence, then the
/// first balanced `{...}` or `[...]` structure (whichever opens first).
///
/// # Errors
///
/// Returns an error if no JSON candidate is found in the response.
///
/// # Examples
///
/// ```
/// use fabulist_models::extract_json;
///
/// let response = "Here you go:\n```json\n[{\"number\": 1}]\n```\n";
/// let json = extract_json(response).unwrap();
/// assert!(json.starts_with('['));
/// ```
pub fn extract_json(response: &str) -> FabulistResult<String> {
    if let Some(json) = extract_from_code_block(response) {
        return Ok(json);
    }

    // Prefer whichever delimiter opens first so an object embedded in a
    // leading sentence does not shadow a top-level array.
    let candidates: &[(char, char)] = match (response.find('['), response.find('{')) {
        (Some(b), Some(c)) if b < c => &[('[', ']'), ('{', '}')],
        (Some(_), None) => &[('[', ']')],
        _ => &[('{', '}'), ('[', ']')],
    };
    for &(open, close) in candidates {
        if let Some(json) = extract_balanced(response, open, close) {
            return Ok(json);
        }
    }

    tracing::error!(
        response_length = response.len(),
        "No JSON found in LLM response"
    );

    Err(JsonError::new(format!(
        "No JSON found in response (length: {})",
        response.len()
    ))
    .into())
}

/// Extract content from a markdown code block, preferring a ```json fence.
fn extract_from_code_block(response: &str) -> Option<String> {
    for opener in ["```json", "```"] {
        if let Some(start) = response.find(opener) {
            let mut content_start = start + opener.len();
            if opener == "```" {
                // Skip a possible language tag on the fence line.
                content_start = response[content_start..]
                    .find('\n')
                    .map(|n| content_start + n + 1)
                    .unwrap_or(content_start);
            }
            let body = &response[content_start..];
            return match body.find("```") {
                Some(end) => Some(body[..end].trim().to_string()),
                // No closing fence: likely a truncated response.
                None => Some(body.trim().to_string()),
            };
        }
    }
    None
}

/// Extract content between balanced delimiters, honoring JSON string
/// literals and escapes.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match ch {
            '\\' => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + i + ch.len_utf8()].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

/// Parse JSON into a specific type.
///
/// # Errors
///
/// Returns an error if the JSON string cannot be parsed into type `T`.
pub fn parse_json<T>(json_str: &str) -> FabulistResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json_str).map_err(|e| {
        let preview = json_str.chars().take(100).collect::<String>();
        tracing::error!(error = %e, json_preview = %preview, "JSON parsing failed");
        JsonError::new(format!("Failed to parse JSON: {} (JSON: {}...)", e, preview)).into()
    })
}
