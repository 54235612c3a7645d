//! Errors from parsing generation output as JSON.
//!
//! Structured generation arrives as text; the payload may be fenced,
//! truncated, or missing entirely. Failures carry the call site so the
//! offending pipeline step is obvious from the log line alone.

/// A JSON payload could not be found or parsed.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// What went wrong, usually with a preview of the offending input
    pub message: String,
    /// Line of the call site
    pub line: u32,
    /// File of the call site
    pub file: &'static str,
}

impl JsonError {
    /// Wrap a message, capturing the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
