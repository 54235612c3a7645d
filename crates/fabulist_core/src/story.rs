//! The top-level story wrapper and its lifecycle status.

use crate::{Chapter, Part, Section, SectionPath, StoryBible};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a story.
///
/// Transitions are monotonic and one-directional; `Ord` captures the
/// ordering so advancement is simply `status.max(next)`. There is no
/// mechanism to revert, and `Writing` is terminal for the remainder of
/// the session once any section is authored.
///
/// # Examples
///
/// ```
/// use fabulist_core::StoryStatus;
///
/// let status = StoryStatus::Structuring;
/// // A repeated authoring call never regresses the status.
/// assert_eq!(status.max(StoryStatus::Writing), StoryStatus::Writing);
/// assert_eq!(StoryStatus::Writing.max(StoryStatus::Structuring), StoryStatus::Writing);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoryStatus {
    /// No bible yet
    Input,
    /// Bible extraction succeeded
    Analyzing,
    /// Structure expansion succeeded
    Structuring,
    /// At least one section has been authored
    Writing,
}

/// A story: one bible, the outline tree, the original raw input, and
/// the lifecycle status.
///
/// The story exclusively owns the entire chapter/part/section tree; no
/// node is shared or referenced from elsewhere. Updates always replace
/// the owning story value wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Unique story identifier
    pub id: Uuid,
    /// The extracted story bible
    pub bible: StoryBible,
    /// Ordered chapters (empty until structure expansion)
    pub chapters: Vec<Chapter>,
    /// The raw story idea this story was derived from
    pub current_input: String,
    /// Lifecycle status
    pub status: StoryStatus,
}

impl Story {
    /// Create a freshly analyzed story with no structure yet.
    pub fn from_bible(bible: StoryBible, input: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            bible,
            chapters: Vec::new(),
            current_input: input.into(),
            status: StoryStatus::Analyzing,
        }
    }

    /// Resolve an identifier triple to its nodes, or `None` when any
    /// identifier along the path does not match.
    pub fn find(&self, path: &SectionPath) -> Option<(&Chapter, &Part, &Section)> {
        let chapter = self.chapters.iter().find(|c| c.id == path.chapter)?;
        let part = chapter.parts.iter().find(|p| p.id == path.part)?;
        let section = part.sections.iter().find(|s| s.id == path.section)?;
        Some((chapter, part, section))
    }

    /// The section immediately preceding the addressed one in reading
    /// order, crossing part and chapter boundaries. `None` for the very
    /// first section or an unknown path.
    pub fn preceding_section(&self, path: &SectionPath) -> Option<&Section> {
        let mut previous = None;
        for chapter in &self.chapters {
            for part in &chapter.parts {
                for section in &part.sections {
                    if section.id == path.section {
                        return previous;
                    }
                    previous = Some(section);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Character;

    fn bible() -> StoryBible {
        StoryBible {
            title: "Rain City".to_string(),
            genre: vec!["noir".to_string()],
            setting: "A rain-soaked metropolis".to_string(),
            characters: vec![Character {
                name: "Mara".to_string(),
                role: "protagonist".to_string(),
                description: "A weary detective".to_string(),
            }],
            theme: vec![],
            synopsis: "A detective digs too deep.".to_string(),
        }
    }

    fn story_with_tree() -> Story {
        let mut story = Story::from_bible(bible(), "a detective in a rain-soaked city");
        story.chapters = vec![Chapter {
            id: "ch-0".to_string(),
            number: 1,
            title: "Arrival".to_string(),
            summary: "Mara arrives".to_string(),
            parts: vec![Part {
                id: "ch-0-p-0".to_string(),
                number: 1,
                summary: "The docks".to_string(),
                sections: vec![
                    Section::new("ch-0-p-0-s-0", 1, "First body"),
                    Section::new("ch-0-p-0-s-1", 2, "The witness"),
                ],
            }],
        }];
        story
    }

    #[test]
    fn status_is_monotonic() {
        assert!(StoryStatus::Input < StoryStatus::Analyzing);
        assert!(StoryStatus::Analyzing < StoryStatus::Structuring);
        assert!(StoryStatus::Structuring < StoryStatus::Writing);
        assert_eq!(
            StoryStatus::Writing.max(StoryStatus::Analyzing),
            StoryStatus::Writing
        );
    }

    #[test]
    fn story_round_trips_through_serde() {
        let story = story_with_tree();
        let json = serde_json::to_string(&story).unwrap();
        let parsed: Story = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, story.id);
        assert_eq!(parsed, story);
    }

    #[test]
    fn find_resolves_existing_path() {
        let story = story_with_tree();
        let path = SectionPath::new("ch-0", "ch-0-p-0", "ch-0-p-0-s-1");
        let (chapter, part, section) = story.find(&path).unwrap();
        assert_eq!(chapter.id, "ch-0");
        assert_eq!(part.id, "ch-0-p-0");
        assert_eq!(section.id, "ch-0-p-0-s-1");
    }

    #[test]
    fn find_rejects_mismatched_triple() {
        let story = story_with_tree();
        let path = SectionPath::new("ch-0", "ch-0-p-1", "ch-0-p-0-s-1");
        assert!(story.find(&path).is_none());
    }

    #[test]
    fn preceding_section_walks_reading_order() {
        let story = story_with_tree();
        let first = SectionPath::new("ch-0", "ch-0-p-0", "ch-0-p-0-s-0");
        assert!(story.preceding_section(&first).is_none());

        let second = SectionPath::new("ch-0", "ch-0-p-0", "ch-0-p-0-s-1");
        let previous = story.preceding_section(&second).unwrap();
        assert_eq!(previous.id, "ch-0-p-0-s-0");
    }
}
