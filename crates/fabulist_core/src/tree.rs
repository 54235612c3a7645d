//! The chapter/part/section outline tree.
//!
//! Identifiers are assigned exactly once at structure expansion from
//! zero-based positional indices and are never regenerated on update.
//! The backend-supplied `number` field is retained only as a display
//! ordinal, decoupled from identity.

use serde::{Deserialize, Serialize};

/// The leaf authoring unit; the only node type that accumulates prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Stable identifier (`ch-{i}-p-{j}-s-{k}`)
    pub id: String,
    /// Display ordinal as supplied by the backend
    pub number: u32,
    /// Target summary: the authoring brief for this section
    pub summary: String,
    /// Accumulated prose, empty until first authored
    #[serde(default)]
    pub content: String,
    /// Compressed summary of the authored content, threaded into the
    /// next section's authoring context
    #[serde(default)]
    pub short_summary: String,
    /// Whether the first draft has been authored
    #[serde(default)]
    pub is_written: bool,
}

impl Section {
    /// Create an unwritten section with empty content.
    pub fn new(id: impl Into<String>, number: u32, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            number,
            summary: summary.into(),
            content: String::new(),
            short_summary: String::new(),
            is_written: false,
        }
    }
}

/// A part: the middle tier of the outline tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Stable identifier (`ch-{i}-p-{j}`)
    pub id: String,
    /// Display ordinal as supplied by the backend
    pub number: u32,
    /// Summary of this part
    pub summary: String,
    /// Ordered sections
    pub sections: Vec<Section>,
}

/// A chapter: the top tier of the outline tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Stable identifier (`ch-{i}`)
    pub id: String,
    /// Display ordinal as supplied by the backend
    pub number: u32,
    /// Chapter title
    pub title: String,
    /// Summary of this chapter
    pub summary: String,
    /// Ordered parts
    pub parts: Vec<Part>,
}
