//! Identifier triples addressing a leaf of the outline tree.

use serde::{Deserialize, Serialize};

/// The chapter/part/section identifier triple addressing one leaf.
///
/// # Examples
///
/// ```
/// use fabulist_core::SectionPath;
///
/// let path = SectionPath::new("ch-0", "ch-0-p-0", "ch-0-p-0-s-1");
/// assert_eq!(format!("{}", path), "ch-0/ch-0-p-0/ch-0-p-0-s-1");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{}/{}/{}", chapter, part, section)]
pub struct SectionPath {
    /// Chapter identifier
    pub chapter: String,
    /// Part identifier
    pub part: String,
    /// Section identifier
    pub section: String,
}

impl SectionPath {
    /// Create a path from its three identifiers.
    pub fn new(
        chapter: impl Into<String>,
        part: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        Self {
            chapter: chapter.into(),
            part: part.into(),
            section: section.into(),
        }
    }
}
