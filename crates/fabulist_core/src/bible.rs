//! Story bible types.

use serde::{Deserialize, Serialize};

/// A character extracted from the raw story idea.
///
/// Characters carry no identifier beyond their position in the bible's
/// character list; uniqueness of names is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Character name
    pub name: String,
    /// Role label (e.g. "protagonist", "antagonist")
    pub role: String,
    /// Free-text description
    pub description: String,
}

/// The extracted high-level premise document grounding all later
/// generation calls.
///
/// Produced once by bible extraction and immutable thereafter. The
/// `genre` and `theme` lists are optional in the extraction schema and
/// default to empty when the backend omits them; the remaining fields
/// are required and their absence is a hard extraction error.
///
/// # Examples
///
/// ```
/// use fabulist_core::StoryBible;
///
/// let bible: StoryBible = serde_json::from_str(
///     r#"{"title":"Rain City","synopsis":"A detective digs too deep.",
///        "setting":"A rain-soaked metropolis","characters":[]}"#,
/// ).unwrap();
/// assert!(bible.genre.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryBible {
    /// Story title (proposed by the backend if the input has none)
    pub title: String,
    /// Ordered genre tags
    #[serde(default)]
    pub genre: Vec<String>,
    /// Setting description
    pub setting: String,
    /// Ordered character list
    pub characters: Vec<Character>,
    /// Ordered theme tags
    #[serde(default)]
    pub theme: Vec<String>,
    /// Overall synopsis
    pub synopsis: String,
}
