//! Static per-component model selection policy.

use serde::{Deserialize, Serialize};

/// Which model each pipeline component uses.
///
/// A faster/cheaper model handles extraction, structuring, and
/// short-summary derivation; a higher-quality model handles prose
/// authoring and continuation. The selection is a static policy per
/// component, not runtime-configurable per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPolicy {
    /// Model for bible extraction, structure expansion, and summaries
    pub analysis: String,
    /// Model for section authoring and continuation
    pub writing: String,
}

impl Default for ModelPolicy {
    fn default() -> Self {
        Self {
            analysis: "gemini-2.5-flash".to_string(),
            writing: "gemini-2.5-pro".to_string(),
        }
    }
}
